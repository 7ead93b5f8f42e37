//! Data models for the daily brief.
//!
//! This module defines the structured document assembled by the formatter:
//! - [`Block`]: one unit of extracted body text, either a heading or a paragraph
//! - [`DailyBrief`]: the complete article ready for rendering
//!
//! The models derive `Serialize` so the brief can also be written as a JSON
//! sidecar alongside the Markdown file.

use serde::Serialize;

/// Placeholder used when the article page carries no `<title>` element.
pub const UNTITLED: &str = "Untitled";

/// A unit of body text extracted from the article, in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A section heading with its level (1 through 6).
    Heading { level: u8, text: String },
    /// A plain paragraph.
    Paragraph { text: String },
}

impl Block {
    /// The text carried by the block, regardless of its kind.
    pub fn text(&self) -> &str {
        match self {
            Block::Heading { text, .. } | Block::Paragraph { text } => text,
        }
    }
}

/// One formatted daily brief, the sole artifact handed to the output layer.
///
/// Invariant: `blocks` preserves the original document order of headings and
/// paragraphs, and is never empty — a contentless article is surfaced as an
/// error by the formatter, not as an empty document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBrief {
    /// The article title, or [`UNTITLED`] when the page has none.
    pub title: String,
    /// A single representative image reference, when one was found.
    pub image_url: Option<String>,
    /// Headings and paragraphs in source order.
    pub blocks: Vec<Block>,
    /// The article URL the brief was extracted from.
    pub source_url: String,
}
