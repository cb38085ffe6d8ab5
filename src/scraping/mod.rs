pub mod extract_images;
pub mod fetch_page;
pub mod match_cards;
