//! Error taxonomy for the daily-brief pipeline.
//!
//! Every failure the pipeline can hit is a distinct [`BriefError`] variant so
//! callers (and tests) can tell "no date had an article" from "the page had
//! no recognizable container" from "the container was empty". Per-candidate
//! probe failures never appear here: the resolver absorbs them by moving on
//! to the next date.

use chrono::NaiveDate;
use thiserror::Error;

/// A fatal failure of one pipeline run.
#[derive(Debug, Error)]
pub enum BriefError {
    /// Every candidate date in the search window failed its probe.
    #[error("no daily brief found for any of {} attempted dates ({})", .attempted.len(), window(.attempted))]
    WindowExhausted {
        /// All probed dates, most recent first.
        attempted: Vec<NaiveDate>,
    },

    /// Transport-level failure while fetching the article page.
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The article page answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// No locator heuristic matched the fetched page.
    #[error("no content container matched any known page layout")]
    ContentNotFound,

    /// A container matched but held no headings or paragraphs after
    /// sanitization.
    #[error("content container yielded no headings or paragraphs")]
    EmptyBody,

    /// Writing an output file failed.
    #[error("failed to write {path}: {source}")]
    Persistence {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn window(attempted: &[NaiveDate]) -> String {
    match (attempted.first(), attempted.last()) {
        (Some(first), Some(last)) => format!(
            "{} back to {}",
            first.format("%Y%m%d"),
            last.format("%Y%m%d")
        ),
        _ => "none attempted".to_string(),
    }
}
