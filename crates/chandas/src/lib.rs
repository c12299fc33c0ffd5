//! # chandas
//!
//! **CLI Binary**
//!
//! This is the entry point for the `chandas` command-line application.
//! It reads a verse, hands it to `chandas-core`, and renders the result.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load configuration
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod input;
mod logging;
mod render;

use anyhow::Result;
use clap::Parser;
use chandas_config::Cli;

/// Entry point used by the `chandas` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose)?;
    let resolved = config::resolve(&cli.global)?;
    commands::dispatch(cli, &resolved)
}

/// Render an error with actionable hints for the terminal.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
