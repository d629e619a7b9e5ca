//! Automatic grid arrangement of uniform tiles.
//!
//! This module splits the work into a pure layout core and a thin engine:
//!
//! - [`layout`] computes partition, tile size, and positions from the
//!   container size, tile count, and target tile aspect ratio.
//! - [`engine`] tracks the container and the ordered tile set, and applies
//!   computed geometry through a [`RenderSurface`].
//! - [`surface`] defines the rendering capability trait and an in-memory
//!   implementation.

pub mod engine;
pub mod error;
pub mod layout;
pub mod state;
pub mod surface;

pub use engine::GridLayoutEngine;
pub use error::{GridError, GridResult};
pub use layout::{GridPlan, best_partition, compute_layout, tile_size};
pub use state::{
    Container, DEFAULT_ASPECT_RATIO, Partition, TileFrame, TileGeometry, TileId, TileSize,
};
pub use surface::{RecordingSurface, RenderSurface, SurfaceError};
