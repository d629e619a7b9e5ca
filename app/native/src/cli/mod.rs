//! CLI module for tilegrid.
//!
//! This module provides the command-line interface for computing layouts
//! headless and inspecting configuration.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::TileGridError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), TileGridError> {
    let cli = Cli::parse();
    cli.execute()
}
