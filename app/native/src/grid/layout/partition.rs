//! Partition search - picks the column/row count for a tile count.
//!
//! Every column count from 1 to N is scored by how far the resulting grid's
//! aspect ratio is from the container's. The first candidate with the lowest
//! score wins, so exact ties resolve to fewer columns.

use crate::grid::state::{Container, Partition};

/// Returns the number of rows needed to hold `count` tiles in `columns` columns.
#[must_use]
pub const fn rows_needed(count: u32, columns: u32) -> u32 { count.div_ceil(columns) }

/// Chooses the partition whose aspect ratio best matches the container.
///
/// Returns `None` when `count` is zero.
///
/// # Arguments
///
/// * `container` - Container dimensions
/// * `count` - Number of tiles to place
/// * `tile_ratio` - Target tile aspect ratio (height ÷ width)
#[must_use]
pub fn best_partition(container: &Container, count: u32, tile_ratio: f64) -> Option<Partition> {
    let available = container.aspect_ratio();
    let mut best: Option<(Partition, f64)> = None;

    for columns in 1..=count {
        let candidate = Partition::new(columns, rows_needed(count, columns));
        let diff = (available - candidate.grid_ratio(tile_ratio)).abs();

        // Strict comparison keeps the earliest candidate on ties
        if best.is_none_or(|(_, min_diff)| diff < min_diff) {
            best = Some((candidate, diff));
        }
    }

    best.map(|(partition, _)| partition)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATIO: f64 = 0.75;

    #[test]
    fn test_rows_needed() {
        assert_eq!(rows_needed(1, 1), 1);
        assert_eq!(rows_needed(5, 2), 3);
        assert_eq!(rows_needed(6, 3), 2);
        assert_eq!(rows_needed(7, 3), 3);
    }

    #[test]
    fn test_zero_tiles_has_no_partition() {
        assert_eq!(best_partition(&Container::new(400, 300), 0, RATIO), None);
    }

    #[test]
    fn test_single_tile() {
        assert_eq!(best_partition(&Container::new(400, 300), 1, RATIO), Some(Partition::new(1, 1)));
    }

    #[test]
    fn test_three_tiles_in_4_3_container() {
        // c=1: |0.75 - 2.25|, c=2: |0.75 - 0.75|, c=3: |0.75 - 0.25|
        assert_eq!(best_partition(&Container::new(400, 300), 3, RATIO), Some(Partition::new(2, 2)));
    }

    #[test]
    fn test_four_tiles_prefers_square_grid() {
        // c=2 matches exactly; c=4 (single row) scores 0.5625
        assert_eq!(best_partition(&Container::new(400, 300), 4, RATIO), Some(Partition::new(2, 2)));
    }

    #[test]
    fn test_tie_resolves_to_fewer_columns() {
        // available = 1.25: c=1 → |1.25 - 2.0| = 0.75, c=2 → |1.25 - 0.5| = 0.75
        let container = Container::new(400, 500);
        assert_eq!(best_partition(&container, 2, 1.0), Some(Partition::new(1, 2)));
    }

    #[test]
    fn test_wide_container_prefers_single_row() {
        let container = Container::new(1600, 300);
        assert_eq!(best_partition(&container, 4, RATIO), Some(Partition::new(4, 1)));
    }

    #[test]
    fn test_tall_container_prefers_single_column() {
        let container = Container::new(300, 1200);
        assert_eq!(best_partition(&container, 3, RATIO), Some(Partition::new(1, 3)));
    }

    #[test]
    fn test_partition_is_minimal_for_all_counts() {
        let containers = [
            Container::new(400, 300),
            Container::new(1920, 1080),
            Container::new(300, 900),
            Container::new(1, 1),
        ];

        for container in &containers {
            for count in 1..=40 {
                let partition = best_partition(container, count, RATIO).unwrap();
                assert!(partition.cells() >= count, "{container:?} n={count}: {partition:?}");
                assert!(
                    partition.cells() - partition.columns < count,
                    "{container:?} n={count}: {partition:?} has an empty row"
                );
            }
        }
    }
}
