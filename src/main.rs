use std::io;

use card_scraper::config::{load_config, TARGET_URL};
use card_scraper::utilities::logger::init_logger;
use card_scraper::utilities::report::report_error;

#[tokio::main]
async fn main() -> io::Result<()> {
    init_logger();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Load configuration settings
    let config = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            let error = anyhow::Error::from(e).context("Failed to load configuration");
            return report_error(&mut out, &error);
        }
    };

    card_scraper::run(&config, TARGET_URL, &mut out).await
}
