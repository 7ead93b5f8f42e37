//! HTTP plumbing shared by the date probe and the full article fetch.
//!
//! The source site serves the brief at a date-stamped URL
//! (`/article/<YYYYMMDD>-daily-brief`) and rejects clients without a
//! browser-looking `User-Agent`, so both concerns live here: building a
//! correctly-identified client and building the URL for a candidate date.

use crate::error::BriefError;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// Browser-identifying User-Agent required by the source site.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) \
Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout applied to probes and fetches alike.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the HTTP client used for the whole run.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

/// URL of the daily brief published on `date`.
pub fn brief_url(base_url: &str, date: NaiveDate) -> String {
    format!(
        "{}/article/{}-daily-brief",
        base_url.trim_end_matches('/'),
        date.format("%Y%m%d")
    )
}

/// Download the article page body.
///
/// A non-success status is an error here, unlike in the probe: by the time
/// this runs, the resolver has already confirmed the article exists.
#[instrument(level = "info", skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, BriefError> {
    let response = client.get(url).send().await.map_err(|e| BriefError::Request {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(BriefError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| BriefError::Request {
        url: url.to_string(),
        source: e,
    })?;
    debug!(bytes = body.len(), "Fetched article page");
    Ok(body)
}
