pub mod config;

pub use self::config::{load_config, AppConfig, HttpConfig, TARGET_URL, USER_AGENT};
