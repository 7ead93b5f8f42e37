//! Output generation for the formatted brief.
//!
//! # Submodules
//!
//! - [`markdown`]: renders the structured document and persists it as
//!   `<YYYYMMDD>-daily-brief.md`
//! - [`json`]: optional JSON copy of the same document for programmatic
//!   consumption
//!
//! The Markdown file is the primary artifact; the JSON sidecar is only
//! written when a directory for it is configured.

pub mod json;
pub mod markdown;
