//! State types for the grid layout engine.
//!
//! This module defines the data structures the engine tracks between calls
//! (container and tile identifiers) and the values it derives on every
//! layout pass (partition and per-tile geometry).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default target tile aspect ratio (height ÷ width), a 4:3 tile.
pub const DEFAULT_ASPECT_RATIO: f64 = 0.75;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a tile tracked by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(String);

impl TileId {
    /// Creates a new tile identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for TileId {
    fn from(s: &str) -> Self { Self(s.to_string()) }
}

impl From<String> for TileId {
    fn from(s: String) -> Self { Self(s) }
}

impl AsRef<str> for TileId {
    fn as_ref(&self) -> &str { &self.0 }
}

// ============================================================================
// Container
// ============================================================================

/// Pixel dimensions of the container the tiles are arranged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Container width in pixels.
    pub width: u32,
    /// Container height in pixels.
    pub height: u32,
}

impl Container {
    /// Creates a new container.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self { Self { width, height } }

    /// Returns the available aspect ratio (height ÷ width).
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 { f64::from(self.height) / f64::from(self.width) }
}

// ============================================================================
// Derived Values
// ============================================================================

/// A row/column partition of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Number of columns.
    pub columns: u32,
    /// Number of rows.
    pub rows: u32,
}

impl Partition {
    /// Creates a new partition.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self { Self { columns, rows } }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub const fn cells(&self) -> u32 { self.columns * self.rows }

    /// Returns the grid aspect ratio for a given tile aspect ratio.
    #[must_use]
    pub fn grid_ratio(&self, tile_ratio: f64) -> f64 {
        f64::from(self.rows) / f64::from(self.columns) * tile_ratio
    }
}

/// Uniform tile size shared by every tile of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSize {
    /// Tile width in pixels.
    pub width: u32,
    /// Tile height in pixels.
    pub height: u32,
}

/// Position and size of one tile, relative to the container origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGeometry {
    /// Index of the tile in placement order.
    pub index: usize,
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl TileGeometry {
    /// Returns the right edge (`x + width`).
    #[must_use]
    pub const fn right(&self) -> u32 { self.x + self.width }

    /// Returns the bottom edge (`y + height`).
    #[must_use]
    pub const fn bottom(&self) -> u32 { self.y + self.height }

    /// Returns true if the geometry lies entirely within the container.
    #[must_use]
    pub const fn fits_within(&self, container: &Container) -> bool {
        self.right() <= container.width && self.bottom() <= container.height
    }
}

/// A tile identifier paired with the geometry it was assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileFrame {
    /// The tile that was placed.
    pub id: TileId,
    /// Where it was placed.
    #[serde(flatten)]
    pub geometry: TileGeometry,
}
