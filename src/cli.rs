//! Command-line interface definitions for the daily brief fetcher.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option has a default, so the program runs with no flags at all.

use clap::Parser;

/// Command-line arguments for the daily brief fetcher.
///
/// # Examples
///
/// ```sh
/// # Fetch the most recent brief and save it to the desktop
/// daily_brief
///
/// # Search backward from a fixed date, keep the file without asking
/// daily_brief --date 20250801 --keep
///
/// # Text only, no viewer, custom output location
/// daily_brief --no-image --no-open -o ./briefs
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Start date for the backward search (YYYYMMDD); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// How many dates to try before giving up
    #[arg(short, long, default_value_t = 7)]
    pub attempts: u32,

    /// Directory for the Markdown file; defaults to the desktop
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Optional directory for a JSON copy of the brief
    #[arg(long)]
    pub json_output_dir: Option<String>,

    /// Base URL of the news site
    #[arg(
        long,
        env = "DAILY_BRIEF_BASE_URL",
        default_value = "https://theinitium.com"
    )]
    pub base_url: String,

    /// Skip image extraction
    #[arg(long)]
    pub no_image: bool,

    /// Do not open the saved brief in a viewer
    #[arg(long)]
    pub no_open: bool,

    /// Keep the saved brief without asking to delete it
    #[arg(long)]
    pub keep: bool,
}
