//! Summary command handler.

use crate::config::SummaryConfig;
use crate::exit::CheckstatExit;
use crate::report::{console, Summary};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;

/// Loads, summarizes and prints the report described by `config`.
///
/// Report errors are printed here and turned into an exit code; nothing is
/// written to stdout in that case.
///
/// # Errors
/// Returns error if stdout cannot be written.
pub fn handle_summary(config: &SummaryConfig) -> Result<CheckstatExit> {
    let summary = match Summary::from_config(config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            return Ok(CheckstatExit::from(&e));
        }
    };

    let text = console::render(&summary);
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write summary to stdout")?;

    Ok(CheckstatExit::Success)
}
