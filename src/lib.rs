pub mod config;
pub mod scrape_cards;
pub mod scraping;
pub mod utilities;

pub use self::config::{AppConfig, HttpConfig};
pub use scrape_cards::{run, scrape_cards};
