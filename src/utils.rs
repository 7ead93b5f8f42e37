//! Utility functions for text normalization and file system operations.
//!
//! This module provides helper functions used throughout the application:
//! - Whitespace normalization for extracted block text
//! - Output directory resolution and writability validation

use std::fs as stdfs;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument};

/// Trim a string and collapse internal whitespace runs to single spaces.
///
/// Extracted article text often spans multiple source lines and carries
/// indentation; a rendered block must be a single line of prose.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(collapse_whitespace("  spread\n  across\tlines "), "spread across lines");
/// ```
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Default directory for saved briefs: the desktop, falling back to the home
/// directory, then the current directory.
pub fn default_output_dir() -> String {
    dirs::desktop_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .to_string_lossy()
        .into_owned()
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> std::io::Result<()> {
    fs::create_dir_all(path).await?;
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}
