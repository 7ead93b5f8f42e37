//! Turning a located content subtree into a structured document.
//!
//! The formatter runs in four fixed steps:
//! 1. strip noise elements (script, style, nav, header, footer)
//! 2. pick at most one representative image reference
//! 3. walk headings and paragraphs in document order into [`Block`]s
//! 4. assemble the [`DailyBrief`], defaulting a missing title
//!
//! Step 1 runs before anything is read out of the tree, so script or nav
//! text can never leak into the body blocks.

use crate::error::BriefError;
use crate::locator::ContentNode;
use crate::models::{Block, DailyBrief, UNTITLED};
use crate::utils::collapse_whitespace;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

static NOISE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script, style, nav, header, footer").unwrap());
static OG_IMAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:image"]"#).unwrap());
static IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());
static BLOCKS: Lazy<Selector> = Lazy::new(|| Selector::parse("h1, h2, h3, h4, h5, h6, p").unwrap());

/// Variation points of the formatting stage.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Extract a representative image reference.
    pub extract_image: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            extract_image: true,
        }
    }
}

/// Assemble the structured document from the located subtree.
///
/// Consumes the node; the subtree is never retained past this call.
///
/// # Errors
///
/// [`BriefError::EmptyBody`] when sanitization leaves no headings or
/// paragraphs — a brief with an empty body is an error, not a document.
pub fn format(
    node: ContentNode,
    title: Option<String>,
    source_url: &str,
    options: FormatOptions,
) -> Result<DailyBrief, BriefError> {
    let mut fragment = node.fragment;
    sanitize(&mut fragment);

    let image_url = if options.extract_image {
        extract_image(&fragment, source_url)
    } else {
        None
    };

    let blocks = extract_blocks(&fragment);
    if blocks.is_empty() {
        return Err(BriefError::EmptyBody);
    }
    debug!(blocks = blocks.len(), image = image_url.is_some(), "Extracted article body");

    Ok(DailyBrief {
        title: title.unwrap_or_else(|| UNTITLED.to_string()),
        image_url,
        blocks,
        source_url: source_url.to_string(),
    })
}

/// Detach every noise subtree from the fragment.
fn sanitize(fragment: &mut Html) {
    let noise: Vec<_> = fragment.select(&NOISE).map(|element| element.id()).collect();
    for id in noise {
        if let Some(mut node) = fragment.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// The social-preview image if the subtree carries one, else the first
/// embedded image. Best effort: with no `og:image` tag this may well pick a
/// logo or other unrelated image.
fn extract_image(fragment: &Html, source_url: &str) -> Option<String> {
    let reference = fragment
        .select(&OG_IMAGE)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .or_else(|| {
            fragment
                .select(&IMG)
                .next()
                .and_then(|img| img.value().attr("src"))
        })?;
    Some(resolve_reference(reference, source_url))
}

/// Resolve a possibly relative reference against the article URL, keeping
/// the raw reference when resolution fails.
fn resolve_reference(reference: &str, source_url: &str) -> String {
    match Url::parse(source_url).and_then(|base| base.join(reference)) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            debug!(reference, error = %e, "Could not resolve image reference");
            reference.to_string()
        }
    }
}

/// Walk headings and paragraphs in document order.
///
/// Whitespace-only elements are dropped; everything else becomes one block
/// with trimmed, single-spaced text.
fn extract_blocks(fragment: &Html) -> Vec<Block> {
    let mut blocks = Vec::new();
    for element in fragment.select(&BLOCKS) {
        let text = collapse_whitespace(&element.text().collect::<String>());
        if text.is_empty() {
            continue;
        }
        match heading_level(element.value().name()) {
            Some(level) => blocks.push(Block::Heading { level, text }),
            None => blocks.push(Block::Paragraph { text }),
        }
    }
    blocks
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}
