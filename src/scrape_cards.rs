use std::collections::BTreeSet;
use std::io::{self, Write};

use anyhow::Result;
use reqwest::Client;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::scraping::extract_images::extract_images;
use crate::scraping::fetch_page::{build_client, fetch_page};
use crate::scraping::match_cards::{match_cards, CardMatch};
use crate::utilities::card_keywords::CARD_KEYWORDS;
use crate::utilities::report::{report_error, report_matches};

/// Fetches `url` and returns the distinct card matches found in its images.
pub async fn scrape_cards(client: &Client, url: &str) -> Result<BTreeSet<CardMatch>> {
    let html_content = fetch_page(client, url).await?;

    let images = extract_images(&html_content)?;
    debug!(count = images.len(), "Extracted images");

    let found_cards = match_cards(&images, &CARD_KEYWORDS);
    let distinct: BTreeSet<CardMatch> = found_cards.into_iter().collect();
    info!(count = distinct.len(), "Matched card images");

    Ok(distinct)
}

/// Runs the whole scrape and writes either the matches or one error line.
///
/// Scrape failures are reported on `out`, not returned; only a failing
/// writer produces an `Err`.
pub async fn run<W: Write>(config: &AppConfig, url: &str, out: &mut W) -> io::Result<()> {
    match scrape_with_config(config, url).await {
        Ok(matches) => report_matches(out, &matches),
        Err(e) => report_error(out, &e),
    }
}

async fn scrape_with_config(config: &AppConfig, url: &str) -> Result<BTreeSet<CardMatch>> {
    let client = build_client(&config.http)?;
    scrape_cards(&client, url).await
}
