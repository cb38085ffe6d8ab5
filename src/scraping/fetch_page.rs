use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use crate::config::{HttpConfig, USER_AGENT};

/// Builds the HTTP client used for the page request.
///
/// Redirects follow reqwest's default policy. Without `timeout_secs` the
/// request may block indefinitely.
pub fn build_client(http: &HttpConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);

    if let Some(secs) = http.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build().context("Failed to build HTTP client")
}

/// Sends one GET request and returns the body as text, decoded with the
/// charset from `Content-Type` (UTF-8 when none is given).
///
/// The status code is not checked: an error page is still parsed like any
/// other. Only network-level failures are returned as errors.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    debug!(url, "Requesting page");

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", url))?;

    let status = response.status();

    let html_content = response
        .text()
        .await
        .context("Failed to read response body")?;
    debug!(%status, len = html_content.len(), "Received page");

    Ok(html_content)
}
