//! Cheap existence checks for candidate dates.
//!
//! The resolver needs to know whether a brief exists for a date without
//! downloading it. [`HttpProbe`] answers that with a `HEAD` request; the
//! [`Probe`] trait is the seam that lets the resolver run against a scripted
//! probe in tests.

use crate::http::brief_url;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::instrument;

/// Outcome of checking a single candidate date.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// The site answered with a success status; an article exists.
    Found,
    /// No article for this date, with the reason (HTTP status, timeout, DNS
    /// failure, ...). All reasons are equivalent to the resolver.
    NotFound(String),
}

/// Existence check for the daily brief of one candidate date.
pub trait Probe {
    async fn probe(&self, date: NaiveDate) -> ProbeOutcome;
}

/// `HEAD`-request probe against the live site.
///
/// `HEAD` rather than `GET`: nonexistent dates are the common case during
/// the backward search, and there is no point transferring full pages just
/// to discard them.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    base_url: String,
}

impl HttpProbe {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl Probe for HttpProbe {
    #[instrument(level = "debug", skip(self))]
    async fn probe(&self, date: NaiveDate) -> ProbeOutcome {
        let url = brief_url(&self.base_url, date);
        match self.client.head(&url).send().await {
            Ok(response) if response.status().is_success() => ProbeOutcome::Found,
            Ok(response) => ProbeOutcome::NotFound(format!("HTTP {}", response.status())),
            Err(e) => ProbeOutcome::NotFound(e.to_string()),
        }
    }
}
