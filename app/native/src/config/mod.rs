//! Configuration module for tilegrid.
//!
//! This module provides configuration types and loading. The configuration
//! only supplies defaults (tile aspect ratio, container size); every value can
//! be overridden from the command line.
//!
//! The configuration file supports JSONC format (JSON with comments).

pub mod types;

use std::path::PathBuf;
use std::sync::OnceLock;

pub use types::{
    ConfigError, ContainerConfig, DEFAULT_CONTAINER_HEIGHT, DEFAULT_CONTAINER_WIDTH, LayoutConfig,
    TileGridConfig, config_paths, load_config as load_config_default, load_config_from_path,
};

/// Global configuration instance, loaded once on first use.
static CONFIG: OnceLock<TileGridConfig> = OnceLock::new();

/// Path to the currently loaded configuration file.
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Custom config path override (set via CLI --config flag).
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets a custom configuration file path to use instead of the default search paths.
///
/// This must be called before `get_config()` to take effect.
///
/// Returns `false` if a path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// Loads the configuration from disk, falling back to defaults.
fn load_or_default() -> TileGridConfig {
    let result = CUSTOM_CONFIG_PATH.get().map_or_else(load_config_default, |path| {
        load_config_from_path(path)
    });

    match result {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            let _ = CONFIG_PATH.set(path);
            config
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            TileGridConfig::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            TileGridConfig::default()
        }
    }
}

/// Returns the global configuration instance, loading it if necessary.
///
/// If no configuration file is found, returns the default configuration.
pub fn get_config() -> &'static TileGridConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the path to the loaded configuration file, if any.
pub fn get_config_path() -> Option<&'static PathBuf> { CONFIG_PATH.get() }
