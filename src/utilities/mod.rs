pub mod card_keywords;
pub mod logger;
pub mod report;
