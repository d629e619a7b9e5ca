//! Pure grid layout computation.
//!
//! Arranging tiles happens in three steps, each a free function with no
//! access to the engine or the rendering surface:
//!
//! 1. [`best_partition`] picks the column/row count whose aspect ratio is
//!    closest to the container's.
//! 2. [`tile_size`] derives the uniform tile size that keeps the grid inside
//!    the container along its constraining side.
//! 3. [`place_tiles`] assigns row-major positions, centering the grid and any
//!    partially filled last row.
//!
//! # Example
//!
//! ```text
//! 400×300 container, 3 tiles, ratio 0.75 → 2 columns × 2 rows, 200×150 tiles
//!
//! +---------+---------+
//! |    0    |    1    |
//! +----+----+----+----+
//!      |    2    |
//!      +---------+
//! ```

mod partition;
mod placement;

pub use partition::{best_partition, rows_needed};
pub use placement::{Margins, place_tiles, tile_size};
use serde::Serialize;

use super::state::{Container, Partition, TileGeometry, TileSize};

/// Everything derived for one layout pass except the per-tile positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridPlan {
    /// Number of tiles the plan was computed for.
    pub count: u32,
    /// Chosen partition.
    pub partition: Partition,
    /// Uniform tile size.
    pub tile_size: TileSize,
    /// Offset of the first row from the container top.
    pub top_margin: u32,
    /// Offset of the first column from the container left.
    pub left_margin: u32,
    /// Extra offset applied to the last row.
    pub last_row_margin: u32,
}

impl GridPlan {
    /// Computes the plan for `count` tiles, or `None` when there are no tiles.
    #[must_use]
    pub fn new(container: &Container, count: u32, tile_ratio: f64) -> Option<Self> {
        let partition = best_partition(container, count, tile_ratio)?;
        let size = tile_size(container, &partition, tile_ratio);
        let margins = Margins::compute(container, &partition, &size, count);

        Some(Self {
            count,
            partition,
            tile_size: size,
            top_margin: margins.top,
            left_margin: margins.left,
            last_row_margin: margins.last_row,
        })
    }

    /// Returns the margins of this plan.
    #[must_use]
    pub const fn margins(&self) -> Margins {
        Margins {
            top: self.top_margin,
            left: self.left_margin,
            last_row: self.last_row_margin,
        }
    }

    /// Assigns a geometry to every tile of the plan.
    #[must_use]
    pub fn geometries(&self) -> Vec<TileGeometry> {
        place_tiles(&self.partition, &self.tile_size, &self.margins(), self.count)
    }
}

/// Computes the geometry of `count` tiles inside `container`.
///
/// Returns an empty list when `count` is zero.
#[must_use]
pub fn compute_layout(container: &Container, count: u32, tile_ratio: f64) -> Vec<TileGeometry> {
    GridPlan::new(container, count, tile_ratio).map_or_else(Vec::new, |plan| plan.geometries())
}
