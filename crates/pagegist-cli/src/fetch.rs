//! Fetch an HTML page over HTTP.

use crate::error::{CliError, Result};
use std::time::Duration;
use tracing::debug;

const FETCH_TIMEOUT_SECS: u64 = 30;
const MAX_REDIRECTS: usize = 10;

/// Fetch a page and return its raw HTML.
///
/// Single GET, no retries. Non-success statuses are errors.
pub async fn fetch_html(url: &str) -> Result<String> {
    let url = url::Url::parse(url)
        .map_err(|e| CliError::InvalidInput(format!("invalid URL '{}': {}", url, e)))?;

    let client = reqwest::Client::builder()
        .user_agent(user_agent())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()?;

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Fetch(format!(
            "request failed with status {}",
            status
        )));
    }

    let body = response.text().await?;
    debug!("fetched {} bytes", body.len());
    Ok(body)
}

fn user_agent() -> String {
    format!(
        "pagegist/{} (rust; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}
