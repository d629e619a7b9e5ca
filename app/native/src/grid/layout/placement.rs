//! Tile sizing and per-tile placement for a chosen partition.

use crate::grid::state::{Container, Partition, TileGeometry, TileSize};

/// Computes the uniform tile size for a partition.
///
/// When the grid is taller than the container (relative to their widths) the
/// tile height is bounded by the container height; otherwise the tile width
/// is bounded by the container width. The other side follows from the tile
/// aspect ratio.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn tile_size(container: &Container, partition: &Partition, tile_ratio: f64) -> TileSize {
    if partition.grid_ratio(tile_ratio) > container.aspect_ratio() {
        let height = container.height / partition.rows;
        let width = (f64::from(height) / tile_ratio).floor() as u32;
        TileSize { width, height }
    } else {
        let width = container.width / partition.columns;
        let height = (f64::from(width) * tile_ratio).floor() as u32;
        TileSize { width, height }
    }
}

/// Offsets that center the grid and its last row inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    /// Offset of the first row from the container top.
    pub top: u32,
    /// Offset of the first column from the container left.
    pub left: u32,
    /// Extra left offset applied to the last row.
    pub last_row: u32,
}

impl Margins {
    /// Computes margins for `count` tiles of `size` laid out in `partition`.
    #[must_use]
    pub const fn compute(
        container: &Container,
        partition: &Partition,
        size: &TileSize,
        count: u32,
    ) -> Self {
        let empty_cells = partition.cells().saturating_sub(count);
        let grid_height = partition.rows.saturating_mul(size.height);
        let grid_width = partition.columns.saturating_mul(size.width);

        Self {
            top: container.height.saturating_sub(grid_height) / 2,
            left: container.width.saturating_sub(grid_width) / 2,
            last_row: empty_cells.saturating_mul(size.width) / 2,
        }
    }
}

/// Assigns a position to each of `count` tiles in row-major order.
///
/// Rows advance by the tile height; columns by the tile width. The last row
/// starts `margins.last_row` further right so a partial row is centered.
#[must_use]
pub fn place_tiles(
    partition: &Partition,
    size: &TileSize,
    margins: &Margins,
    count: u32,
) -> Vec<TileGeometry> {
    let columns = partition.columns;
    let last_row_start = (partition.rows - 1) * columns;

    let mut result = Vec::with_capacity(count as usize);
    let mut x = 0;
    let mut y = 0;

    for i in 0..count {
        if i % columns == 0 {
            x = margins.left;
            if i == last_row_start {
                x += margins.last_row;
            }
            y = if i == 0 { margins.top } else { y + size.height };
        } else {
            x += size.width;
        }

        result.push(TileGeometry {
            index: i as usize,
            x,
            y,
            width: size.width,
            height: size.height,
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATIO: f64 = 0.75;

    #[test]
    fn test_width_constrained_size() {
        let size = tile_size(&Container::new(400, 300), &Partition::new(2, 2), RATIO);
        assert_eq!(size, TileSize { width: 200, height: 150 });
    }

    #[test]
    fn test_height_constrained_size() {
        // Grid ratio 1.5 exceeds the available 0.75
        let size = tile_size(&Container::new(400, 300), &Partition::new(1, 2), RATIO);
        assert_eq!(size, TileSize { width: 200, height: 150 });

        let size = tile_size(&Container::new(800, 300), &Partition::new(1, 3), RATIO);
        assert_eq!(size, TileSize { width: 133, height: 100 });
    }

    #[test]
    fn test_size_floors_fractions() {
        let size = tile_size(&Container::new(1000, 700), &Partition::new(3, 2), RATIO);
        // 1000 / 3 = 333, 333 * 0.75 = 249.75
        assert_eq!(size, TileSize { width: 333, height: 249 });
    }

    #[test]
    fn test_margins_center_grid() {
        let container = Container::new(1000, 700);
        let partition = Partition::new(3, 2);
        let size = TileSize { width: 333, height: 249 };
        let margins = Margins::compute(&container, &partition, &size, 6);

        assert_eq!(margins.top, (700 - 498) / 2);
        assert_eq!(margins.left, (1000 - 999) / 2);
        assert_eq!(margins.last_row, 0);
    }

    #[test]
    fn test_margins_center_partial_last_row() {
        let container = Container::new(600, 300);
        let partition = Partition::new(3, 2);
        let size = TileSize { width: 200, height: 150 };
        let margins = Margins::compute(&container, &partition, &size, 4);

        // Two empty cells: shift by one full tile width
        assert_eq!(margins.last_row, 200);
    }

    #[test]
    fn test_place_tiles_row_major() {
        let partition = Partition::new(2, 2);
        let size = TileSize { width: 200, height: 150 };
        let margins = Margins { top: 0, left: 0, last_row: 0 };
        let tiles = place_tiles(&partition, &size, &margins, 4);

        let positions: Vec<(u32, u32)> = tiles.iter().map(|t| (t.x, t.y)).collect();
        assert_eq!(positions, vec![(0, 0), (200, 0), (0, 150), (200, 150)]);
        assert!(tiles.iter().enumerate().all(|(i, t)| t.index == i));
    }

    #[test]
    fn test_place_tiles_applies_offsets() {
        let partition = Partition::new(3, 2);
        let size = TileSize { width: 100, height: 75 };
        let margins = Margins { top: 10, left: 20, last_row: 50 };
        let tiles = place_tiles(&partition, &size, &margins, 5);

        assert_eq!((tiles[0].x, tiles[0].y), (20, 10));
        assert_eq!((tiles[2].x, tiles[2].y), (220, 10));
        assert_eq!((tiles[3].x, tiles[3].y), (70, 85));
        assert_eq!((tiles[4].x, tiles[4].y), (170, 85));
    }

    #[test]
    fn test_place_no_tiles() {
        let tiles = place_tiles(
            &Partition::new(1, 1),
            &TileSize { width: 10, height: 10 },
            &Margins { top: 0, left: 0, last_row: 0 },
            0,
        );
        assert!(tiles.is_empty());
    }
}
