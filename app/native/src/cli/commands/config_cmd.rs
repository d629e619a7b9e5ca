//! Config CLI commands.
//!
//! Commands for inspecting the tilegrid configuration file.

use clap::Subcommand;

use crate::cli::output;
use crate::config::{self, config_paths};
use crate::error::TileGridError;

/// Config inspection commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Show the configuration file search paths.
    ///
    /// Lists the locations tilegrid looks for a configuration file, in
    /// priority order, and marks the one currently in use.
    Path,

    /// Print the effective configuration as JSON.
    ///
    /// Shows the loaded configuration with defaults filled in.
    Show,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn execute(cmd: &ConfigCommands) -> Result<(), TileGridError> {
    match cmd {
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
        ConfigCommands::Show => {
            let value = serde_json::to_value(config::get_config())?;
            output::print_highlighted_json(&value);
            Ok(())
        }
    }
}

/// Prints the configuration file search paths.
fn show_config_path() {
    // The active path is only known once the configuration has been loaded
    let _ = config::get_config();
    let active = config::get_config_path();
    println!("Configuration file search paths (in priority order):\n");

    for (i, path) in config_paths().iter().enumerate() {
        let marker = if active == Some(path) {
            " (active)"
        } else if path.exists() {
            " (exists)"
        } else {
            ""
        };

        println!("  {}. {}{}", i + 1, path.display(), marker);
    }

    if let Some(path) = active.filter(|path| !config_paths().contains(*path)) {
        println!("\n  Custom: {} (active)", path.display());
    } else if active.is_none() {
        println!("\nNo configuration file found, using defaults.");
    }
}
