//! Delivery of the saved brief: launching a viewer and the interactive
//! delete prompt.
//!
//! Both operations are deliberately best-effort. A viewer that fails to
//! start, or a prompt that cannot be read, never fails the pipeline — the
//! brief is already on disk at this point.

use dialoguer::Confirm;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use tracing::{error, info, warn};

/// Launch the platform's default viewer for the saved file.
///
/// The viewer is spawned and not waited on; the caller reports a launch
/// failure and moves on.
pub fn open_file(path: &Path) -> std::io::Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    command.spawn().map(|_| ())
}

/// Ask whether to delete the saved brief and act on the answer.
///
/// A missing file is reported distinctly from other removal errors. When the
/// prompt cannot be read (e.g. a non-interactive terminal) the file is kept:
/// output is never destroyed without a confirmed answer.
pub fn confirm_and_delete(path: &Path, file_name: &str) {
    let confirmed = Confirm::new()
        .with_prompt(format!("Delete {file_name}?"))
        .default(false)
        .interact();

    match confirmed {
        Ok(true) => match std::fs::remove_file(path) {
            Ok(()) => info!(file = %file_name, "Deleted daily brief"),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(file = %file_name, "Brief file no longer exists")
            }
            Err(e) => error!(file = %file_name, error = %e, "Failed to delete brief"),
        },
        Ok(false) => info!(file = %file_name, "Keeping daily brief"),
        Err(e) => warn!(error = %e, "Could not read confirmation; keeping file"),
    }
}
