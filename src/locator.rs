//! Locating the article body inside heterogeneous page markup.
//!
//! The site's template is not stable across redesigns, so the locator tries
//! a fixed list of structural heuristics in order, most specific first, and
//! trusts the first one that matches. A page carrying both a named article
//! container and a bare `<main>` landmark resolves to the container.
//!
//! New template variants are handled by adding an entry to [`HEURISTICS`],
//! not by touching the control flow.

use crate::error::BriefError;
use crate::utils::collapse_whitespace;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// A named structural rule that may identify the article body.
struct Heuristic {
    name: &'static str,
    selector: Selector,
}

impl Heuristic {
    fn new(name: &'static str, selector: &'static str) -> Self {
        Self {
            name,
            selector: Selector::parse(selector).unwrap(),
        }
    }
}

/// Ordered heuristic list, most specific first.
static HEURISTICS: Lazy<Vec<Heuristic>> = Lazy::new(|| {
    vec![
        Heuristic::new("named article container", "div.article-content"),
        Heuristic::new("generic content container", "div.content"),
        Heuristic::new("article element", "article"),
        Heuristic::new("main landmark", "main"),
    ]
});

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

/// The located article subtree, detached from the page it was found in.
///
/// Owns a re-parsed copy of the matched element so the formatter can strip
/// noise elements without touching the fetched document. Created once per
/// fetch and consumed entirely by the formatter.
pub struct ContentNode {
    pub(crate) fragment: Html,
}

impl ContentNode {
    fn from_element(element: ElementRef<'_>) -> Self {
        Self {
            fragment: Html::parse_fragment(&element.html()),
        }
    }
}

/// Find the subtree containing the article body.
///
/// Returns the subtree matched by the first heuristic that yields a match;
/// if none does, the page layout is unknown and the run must fail visibly
/// rather than produce an empty document.
pub fn locate(document: &Html) -> Result<ContentNode, BriefError> {
    for heuristic in HEURISTICS.iter() {
        if let Some(element) = document.select(&heuristic.selector).next() {
            debug!(heuristic = heuristic.name, "Content container matched");
            return Ok(ContentNode::from_element(element));
        }
    }
    Err(BriefError::ContentNotFound)
}

/// Text of the page-level `<title>` element, if any.
pub fn page_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<String>()))
        .filter(|title| !title.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subtree_text(node: &ContentNode) -> String {
        node.fragment.root_element().text().collect::<String>()
    }

    #[test]
    fn test_specific_container_beats_generic_fallbacks() {
        let html = r#"<html><body>
            <main><p>main fallback</p></main>
            <div class="content"><p>generic body</p></div>
            <div class="article-content"><p>specific body</p></div>
        </body></html>"#;
        let document = Html::parse_document(html);

        let node = locate(&document).unwrap();
        let text = subtree_text(&node);
        assert!(text.contains("specific body"));
        assert!(!text.contains("generic body"));
        assert!(!text.contains("main fallback"));
    }

    #[test]
    fn test_generic_container_matches_when_no_specific_one() {
        let html = r#"<div class="content"><h2>Section</h2><p>body</p></div>"#;
        let document = Html::parse_document(html);

        let node = locate(&document).unwrap();
        assert!(subtree_text(&node).contains("body"));
    }

    #[test]
    fn test_article_and_main_landmarks_are_fallbacks() {
        let article = Html::parse_document("<article><p>from article</p></article>");
        assert!(subtree_text(&locate(&article).unwrap()).contains("from article"));

        let main = Html::parse_document("<main><p>from main</p></main>");
        assert!(subtree_text(&locate(&main).unwrap()).contains("from main"));
    }

    #[test]
    fn test_unknown_layout_is_an_error() {
        let html = r#"<html><body><div class="sidebar"><p>nav stuff</p></div></body></html>"#;
        let document = Html::parse_document(html);

        assert!(matches!(
            locate(&document),
            Err(BriefError::ContentNotFound)
        ));
    }

    #[test]
    fn test_page_title_is_trimmed() {
        let document =
            Html::parse_document("<html><head><title>  Daily\n   Brief </title></head></html>");
        assert_eq!(page_title(&document), Some("Daily Brief".to_string()));
    }

    #[test]
    fn test_missing_or_empty_title_is_none() {
        let document = Html::parse_document("<html><body><p>x</p></body></html>");
        assert_eq!(page_title(&document), None);

        let document = Html::parse_document("<html><head><title>   </title></head></html>");
        assert_eq!(page_title(&document), None);
    }
}
