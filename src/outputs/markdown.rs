//! Markdown rendering and persistence for the daily brief.
//!
//! # Layout
//!
//! The rendered document has a fixed shape:
//!
//! ```text
//! # <title>
//!
//! ![image](<image url>)        (omitted when no image was extracted)
//!
//! <blocks, one paragraph each; headings as #-runs of their level>
//!
//! [Source](<article url>)
//! ```

use crate::error::BriefError;
use crate::models::{Block, DailyBrief};
use chrono::NaiveDate;
use std::fmt::Write;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument};

/// Render the structured document as Markdown.
pub fn brief_to_markdown(brief: &DailyBrief) -> String {
    let mut md = String::new();
    writeln!(md, "# {}", brief.title).unwrap();

    if let Some(ref image_url) = brief.image_url {
        writeln!(md, "\n![image]({})", image_url).unwrap();
    }

    for block in &brief.blocks {
        match block {
            Block::Heading { level, text } => {
                writeln!(md, "\n{} {}", "#".repeat(*level as usize), text).unwrap()
            }
            Block::Paragraph { text } => writeln!(md, "\n{}", text).unwrap(),
        }
    }

    writeln!(md, "\n[Source]({})", brief.source_url).unwrap();
    md
}

/// Deterministic output filename for a resolved date.
pub fn brief_filename(date: NaiveDate) -> String {
    format!("{}-daily-brief.md", date.format("%Y%m%d"))
}

/// Persist the rendered brief, returning the full path and bare filename.
#[instrument(level = "info", skip(markdown), fields(%output_dir))]
pub async fn write_brief(
    markdown: &str,
    output_dir: &str,
    date: NaiveDate,
) -> Result<(PathBuf, String), BriefError> {
    let file_name = brief_filename(date);
    let path = PathBuf::from(output_dir).join(&file_name);

    fs::write(&path, markdown)
        .await
        .map_err(|e| BriefError::Persistence {
            path: path.display().to_string(),
            source: e,
        })?;

    info!(path = %path.display(), "Wrote daily brief");
    Ok((path, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_brief() -> DailyBrief {
        DailyBrief {
            title: "Morning Brief".to_string(),
            image_url: Some("https://cdn.example.com/cover.jpg".to_string()),
            blocks: vec![
                Block::Heading {
                    level: 2,
                    text: "First Section".to_string(),
                },
                Block::Paragraph {
                    text: "Opening paragraph.".to_string(),
                },
            ],
            source_url: "https://example.com/article/20250806-daily-brief".to_string(),
        }
    }

    #[test]
    fn test_rendered_layout_and_order() {
        let md = brief_to_markdown(&sample_brief());
        assert_eq!(
            md,
            "# Morning Brief\n\n\
             ![image](https://cdn.example.com/cover.jpg)\n\n\
             ## First Section\n\n\
             Opening paragraph.\n\n\
             [Source](https://example.com/article/20250806-daily-brief)\n"
        );
    }

    #[test]
    fn test_image_line_is_omitted_when_absent() {
        let mut brief = sample_brief();
        brief.image_url = None;

        let md = brief_to_markdown(&brief);
        assert!(!md.contains("!["));
        assert!(md.starts_with("# Morning Brief\n\n## First Section\n"));
    }

    #[test]
    fn test_heading_marker_matches_level() {
        let mut brief = sample_brief();
        brief.blocks = vec![Block::Heading {
            level: 4,
            text: "Deep".to_string(),
        }];

        assert!(brief_to_markdown(&brief).contains("\n#### Deep\n"));
    }

    #[test]
    fn test_brief_filename_is_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        assert_eq!(brief_filename(date), "20250806-daily-brief.md");
    }

    #[tokio::test]
    async fn test_write_brief_round_trips_content() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();

        let (path, file_name) = write_brief("# hello\n", dir.path().to_str().unwrap(), date)
            .await
            .unwrap();

        assert_eq!(file_name, "20250806-daily-brief.md");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# hello\n");
    }

    #[tokio::test]
    async fn test_write_brief_into_missing_dir_is_persistence_error() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        let err = write_brief("x", "/nonexistent/briefs", date)
            .await
            .unwrap_err();
        assert!(matches!(err, BriefError::Persistence { .. }));
    }
}
