//! # Daily Brief
//!
//! Fetches the most recent *daily brief* article from a news site, converts
//! it to Markdown, saves it, opens it in a viewer, and offers to delete it.
//!
//! The site publishes one brief per day at a date-stamped URL, but not
//! reliably for every calendar date, and its page template changes without
//! notice. The program tolerates both: it probes backward from the start
//! date until it finds a published brief, then locates the article body with
//! an ordered list of structural heuristics.
//!
//! ## Usage
//!
//! ```sh
//! daily_brief
//! daily_brief --date 20250801 --attempts 3 --no-open
//! ```
//!
//! ## Architecture
//!
//! The application is a strictly sequential pipeline:
//! 1. **Resolve**: HEAD-probe candidate dates, newest first, until one has
//!    a published article
//! 2. **Fetch**: download the article page for the resolved date
//! 3. **Extract**: locate the article body and format it into a structured
//!    document (title, one image, heading/paragraph blocks, source link)
//! 4. **Deliver**: write Markdown (and an optional JSON copy), open a
//!    viewer, interactively offer to delete the file

use chrono::{Local, NaiveDate};
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod delivery;
mod error;
mod formatter;
mod http;
mod locator;
mod models;
mod outputs;
mod probe;
mod resolver;
mod utils;

use cli::Cli;
use error::BriefError;
use formatter::FormatOptions;
use outputs::{json, markdown};
use probe::HttpProbe;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("daily_brief starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.date, ?args.attempts, ?args.output_dir, "Parsed CLI arguments");

    // Start date: explicit argument, or today in local time. The resolver
    // itself never reads the clock.
    let start_date = match args.date.as_deref() {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y%m%d") {
            Ok(date) => date,
            Err(e) => {
                error!(date = raw, error = %e, "Invalid start date; expected YYYYMMDD");
                return Err(e.into());
            }
        },
        None => Local::now().date_naive(),
    };

    let output_dir = args.output_dir.clone().unwrap_or_else(utils::default_output_dir);

    // Early check: ensure the output dir is writable
    if let Err(e) = utils::ensure_writable_dir(&output_dir).await {
        error!(
            path = %output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(Box::new(BriefError::Persistence {
            path: output_dir,
            source: e,
        }) as Box<dyn Error>);
    }

    let client = http::build_client()?;

    // ---- Resolve the date window ----
    let probe = HttpProbe::new(client.clone(), args.base_url.clone());
    let date = match resolver::resolve(&probe, start_date, args.attempts).await {
        Ok(date) => date,
        Err(e) => {
            error!(
                start = %start_date.format("%Y%m%d"),
                attempts = args.attempts,
                error = %e,
                "No date in the window has a published brief"
            );
            return Err(Box::new(e));
        }
    };

    // ---- Fetch & extract ----
    let url = http::brief_url(&args.base_url, date);
    let body = match http::fetch_page(&client, &url).await {
        Ok(body) => body,
        Err(e) => {
            error!(%url, date = %date.format("%Y%m%d"), error = %e, "Fetching the brief failed");
            return Err(Box::new(e));
        }
    };

    // Parsed HTML stays inside this block; nothing non-Send crosses an await.
    let brief = {
        let document = scraper::Html::parse_document(&body);
        let title = locator::page_title(&document);

        let node = match locator::locate(&document) {
            Ok(node) => node,
            Err(e) => {
                error!(%url, date = %date.format("%Y%m%d"), error = %e, "Could not locate the article body");
                return Err(Box::new(e));
            }
        };

        let options = FormatOptions {
            extract_image: !args.no_image,
        };
        match formatter::format(node, title, &url, options) {
            Ok(brief) => brief,
            Err(e) => {
                error!(%url, date = %date.format("%Y%m%d"), error = %e, "Brief has no renderable content");
                return Err(Box::new(e));
            }
        }
    };
    info!(title = %brief.title, blocks = brief.blocks.len(), "Formatted daily brief");

    // ---- Write outputs ----
    let md = markdown::brief_to_markdown(&brief);
    let (path, file_name) = match markdown::write_brief(&md, &output_dir, date).await {
        Ok(written) => written,
        Err(e) => {
            error!(error = %e, "Saving the brief failed");
            return Err(Box::new(e));
        }
    };

    if let Some(ref json_dir) = args.json_output_dir {
        if let Err(e) = json::write_brief_json(&brief, json_dir, date).await {
            error!(error = %e, "Failed to write the JSON copy");
        }
    }

    // ---- Open & optional delete ----
    if !args.no_open {
        if let Err(e) = delivery::open_file(&path) {
            warn!(path = %path.display(), error = %e, "Could not launch a viewer");
        }
    }

    if !args.keep {
        delivery::confirm_and_delete(&path, &file_name);
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, secs = elapsed.as_secs(), "Execution complete");

    Ok(())
}
