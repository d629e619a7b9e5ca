//! CLI command definitions using Clap.
//!
//! - `layout` - Layout commands (`layout`, `partition`)
//! - `config_cmd` - Configuration file commands
//! - `types` - Shared argument types

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::error::TileGridError;
use crate::{config, schema};

pub mod config_cmd;
pub mod layout;
pub mod types;

pub use config_cmd::ConfigCommands;
pub use layout::{LayoutArgs, PartitionArgs};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// tilegrid - arrange uniform tiles in a best-fit grid.
#[derive(Parser, Debug)]
#[command(name = "tilegrid")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Lay out tiles and print the geometry of each one.
    Layout(LayoutArgs),

    /// Print the best-fit partition and tile size for a tile count.
    Partition(PartitionArgs),

    /// Configuration file commands.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output the configuration JSON Schema.
    ///
    /// Can be redirected to a file for use with editors that support
    /// JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(tilegrid completions --shell zsh)"
    ///   tilegrid completions --shell fish > ~/.config/fish/completions/tilegrid.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), TileGridError> {
        if let Some(path) = &self.config {
            if !path.exists() {
                return Err(TileGridError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path.clone());
        }

        match &self.command {
            Commands::Layout(args) => layout::execute_layout(args),
            Commands::Partition(args) => layout::execute_partition(args),
            Commands::Config(cmd) => config_cmd::execute(cmd),

            Commands::Schema => {
                println!("{}", schema::print_schema());
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "tilegrid", &mut io::stdout());
    }
}
