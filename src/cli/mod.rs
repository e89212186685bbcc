// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::Cli;

use crate::config::SummaryConfig;
use crate::exit::CheckstatExit;
use anyhow::Result;

/// Runs the parsed invocation.
///
/// # Errors
/// Returns error if the handler fails outside of report loading.
pub fn execute(_cli: &Cli) -> Result<CheckstatExit> {
    handlers::handle_summary(&SummaryConfig::default())
}
