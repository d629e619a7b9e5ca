//! Root configuration structure and file loading.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::layout::{ContainerConfig, LayoutConfig};

/// Root configuration structure for tilegrid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TileGridConfig {
    /// Optional JSON Schema reference, ignored at runtime.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Tile layout configuration.
    pub layout: LayoutConfig,

    /// Default container dimensions.
    pub container: ContainerConfig,
}

/// Errors that can occur when loading the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    NotFound,
    /// The configuration file exists but could not be read.
    IoError(std::io::Error),
    /// The configuration file contains invalid JSON.
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(
                f,
                "No configuration file found. Expected at ~/.config/tilegrid/config.jsonc \
                or ~/.tilegrid.jsonc"
            ),
            Self::IoError(err) => write!(f, "Failed to read configuration file: {err}"),
            Self::ParseError(err) => write!(f, "Failed to parse configuration file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::ParseError(err) => Some(err),
            Self::NotFound => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err) }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self { Self::ParseError(err) }
}

/// Application directory name inside config roots.
const APP_DIR: &str = "tilegrid";

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Configuration file names in the home directory.
const HOME_CONFIG_FILE_NAMES: &[&str] = &[".tilegrid.jsonc", ".tilegrid.json"];

/// Returns the possible configuration file paths in priority order.
///
/// 1. `$XDG_CONFIG_HOME/tilegrid/config.jsonc` or `config.json`, if set
/// 2. `~/.config/tilegrid/config.jsonc` or `config.json`
/// 3. The platform config directory (`dirs::config_dir`)
/// 4. `~/.tilegrid.jsonc` or `~/.tilegrid.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    fn push_dir(dir: &Path, paths: &mut Vec<PathBuf>) {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            // XDG_CONFIG_HOME is often ~/.config already
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        push_dir(&PathBuf::from(xdg_config).join(APP_DIR), &mut paths);
    }

    if let Some(home) = dirs::home_dir() {
        push_dir(&home.join(".config").join(APP_DIR), &mut paths);
    }

    if let Some(config_dir) = dirs::config_dir() {
        push_dir(&config_dir.join(APP_DIR), &mut paths);
    }

    if let Some(home) = dirs::home_dir() {
        for filename in HOME_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from a specific file.
///
/// Comments (`//` and `/* */`) are stripped before parsing.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::IoError` if it could not be read, or
/// `ConfigError::ParseError` if it is not valid JSON.
pub fn load_config_from_path(path: &Path) -> Result<(TileGridConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: TileGridConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, or the errors of [`load_config_from_path`] for the
/// first file found.
pub fn load_config() -> Result<(TileGridConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}
