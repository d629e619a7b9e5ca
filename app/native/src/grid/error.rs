//! Error types for the grid layout engine.
//!
//! All errors are usage errors surfaced synchronously to the caller. None of
//! them are transient, so nothing in the engine retries.
//!
//! # Example
//!
//! ```rust,ignore
//! use tilegrid_lib::grid::{GridError, GridResult};
//!
//! fn drop_feed(engine: &mut GridLayoutEngine<impl RenderSurface>, id: &str) -> GridResult<()> {
//!     match engine.remove_tile(id) {
//!         Err(err) if err.is_not_found() => Ok(()),
//!         other => other,
//!     }
//! }
//! ```

use thiserror::Error;

use super::state::TileId;
use super::surface::SurfaceError;

/// Result type alias for grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur while managing or laying out tiles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// The engine has not been initialized with container dimensions.
    #[error("Grid layout engine not initialized")]
    NotInitialized,

    /// No tile with the given identifier is tracked.
    #[error("Tile '{0}' not found")]
    TileNotFound(TileId),

    /// A tile with the given identifier is already tracked.
    #[error("Tile '{0}' already exists")]
    DuplicateTile(TileId),

    /// The container width or height is zero.
    #[error("Invalid container dimensions {width}x{height}: both must be positive")]
    InvalidDimension {
        /// Requested container width.
        width: u32,
        /// Requested container height.
        height: u32,
    },

    /// The target tile aspect ratio is not a positive finite number.
    #[error("Invalid aspect ratio {0}: must be a positive finite number")]
    InvalidAspectRatio(f64),

    /// The rendering surface rejected an operation.
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),
}

impl GridError {
    /// Creates a tile-not-found error.
    #[must_use]
    pub fn not_found(id: impl Into<TileId>) -> Self { Self::TileNotFound(id.into()) }

    /// Creates a surface error with a free-form message.
    #[must_use]
    pub fn surface(message: impl Into<String>) -> Self {
        Self::Surface(SurfaceError::Other(message.into()))
    }

    /// Returns `true` if the engine was used before `initialize`.
    #[must_use]
    pub const fn is_not_available(&self) -> bool { matches!(self, Self::NotInitialized) }

    /// Returns `true` if this error indicates a tile was not found.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TileNotFound(_) | Self::Surface(SurfaceError::MissingElement(_)))
    }
}
