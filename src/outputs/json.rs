//! Optional JSON sidecar of the structured document.
//!
//! Mirrors the Markdown artifact for programmatic consumers; written only
//! when a JSON output directory is configured.

use crate::error::BriefError;
use crate::models::DailyBrief;
use chrono::NaiveDate;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize the brief and write `<YYYYMMDD>-daily-brief.json`.
///
/// Creates the output directory if it doesn't exist.
#[instrument(level = "info", skip(brief), fields(%output_dir))]
pub async fn write_brief_json(
    brief: &DailyBrief,
    output_dir: &str,
    date: NaiveDate,
) -> Result<PathBuf, BriefError> {
    let path = PathBuf::from(output_dir).join(format!("{}-daily-brief.json", date.format("%Y%m%d")));
    let persistence = |e: std::io::Error| BriefError::Persistence {
        path: path.display().to_string(),
        source: e,
    };

    let json = serde_json::to_string_pretty(brief)
        .map_err(|e| persistence(std::io::Error::other(e)))?;

    fs::create_dir_all(output_dir).await.map_err(persistence)?;
    fs::write(&path, json).await.map_err(persistence)?;

    info!(path = %path.display(), "Wrote JSON brief");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Block;

    #[tokio::test]
    async fn test_write_brief_json_creates_dir_and_file() {
        let base = tempfile::tempdir().unwrap();
        let dir = base.path().join("json").display().to_string();
        let date = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        let brief = DailyBrief {
            title: "Brief".to_string(),
            image_url: None,
            blocks: vec![Block::Paragraph {
                text: "body".to_string(),
            }],
            source_url: "https://example.com/article/20250806-daily-brief".to_string(),
        };

        let path = write_brief_json(&brief, &dir, date).await.unwrap();
        assert!(path.ends_with("20250806-daily-brief.json"));

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["title"], "Brief");
        assert_eq!(parsed["blocks"][0]["kind"], "paragraph");
    }
}
