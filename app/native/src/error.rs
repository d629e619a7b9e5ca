//! Error types for tilegrid.
//!
//! This module provides the application-level error returned by CLI commands.
//! Grid usage errors keep their own type ([`crate::grid::GridError`]) and are
//! converted here at the command boundary.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::grid::GridError;

/// Errors that can occur during application execution.
///
/// Serializes as `{ "kind": ..., "message": ... }` so JSON consumers of the
/// CLI get structured failures.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum TileGridError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Grid layout operation failed.
    #[error("Layout error: {0}")]
    LayoutError(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<GridError> for TileGridError {
    fn from(err: GridError) -> Self { Self::LayoutError(err.to_string()) }
}

impl From<ConfigError> for TileGridError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<std::io::Error> for TileGridError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for TileGridError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<String> for TileGridError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for TileGridError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arguments_display() {
        let err = TileGridError::InvalidArguments("Either --count or --tile is required".into());
        assert_eq!(err.to_string(), "Either --count or --tile is required");
    }

    #[test]
    fn test_from_grid_error() {
        let err: TileGridError = GridError::InvalidDimension { width: 0, height: 10 }.into();
        assert!(matches!(err, TileGridError::LayoutError(_)));
        assert!(err.to_string().starts_with("Layout error: Invalid container dimensions"));
    }

    #[test]
    fn test_from_config_error() {
        let err: TileGridError = ConfigError::NotFound.into();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err: TileGridError = io_err.into();
        assert!(matches!(err, TileGridError::IoError(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_from_string() {
        let err: TileGridError = "test error".into();
        assert!(matches!(err, TileGridError::CommandError(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_error_serializes_with_kind() {
        let err = TileGridError::LayoutError("Tile 'a' not found".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "LayoutError");
        assert_eq!(json["message"], "Tile 'a' not found");
    }
}
