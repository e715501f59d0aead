//! Moore-neighborhood counting over a sparse live set.
//!
//! All three strategies produce the same map: every cell with at least one
//! live neighbor, keyed to its neighbor count. A cell missing from the map
//! has zero live neighbors.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use super::{BoundingBox, Cell, Resolution};

pub type NeighborCounts = HashMap<Cell, u8>;

/// Sparse counting: each live cell adds one to its 8 neighbors.
/// Cost is proportional to the number of live cells.
pub fn count_live_neighbors(cells: &HashSet<Cell>, resolution: Resolution) -> NeighborCounts {
    let step = resolution.step();
    let mut counts = NeighborCounts::with_capacity(cells.len() * 8);

    for cell in cells {
        for neighbor in cell.neighbors(step) {
            *counts.entry(neighbor).or_insert(0) += 1;
        }
    }

    counts
}

/// Sparse counting split across rayon workers.
/// Each worker folds into its own map; partial maps are summed at the end.
pub fn count_live_neighbors_parallel(cells: &HashSet<Cell>, resolution: Resolution) -> NeighborCounts {
    let step = resolution.step();

    cells
        .par_iter()
        .fold(NeighborCounts::new, |mut counts, cell| {
            for neighbor in cell.neighbors(step) {
                *counts.entry(neighbor).or_insert(0) += 1;
            }
            counts
        })
        .reduce(NeighborCounts::new, merge_counts)
}

fn merge_counts(mut a: NeighborCounts, b: NeighborCounts) -> NeighborCounts {
    if a.len() < b.len() {
        return merge_counts(b, a);
    }
    for (cell, n) in b {
        *a.entry(cell).or_insert(0) += n;
    }
    a
}

/// Brute-force counting: visit every cell of the bounding box plus a one
/// cell margin and look up its 8 neighbors directly.
/// Cost is proportional to the box area; kept as a reference implementation.
pub fn count_live_neighbors_naive(cells: &HashSet<Cell>, resolution: Resolution) -> NeighborCounts {
    let Some(bounds) = BoundingBox::from_cells(cells) else {
        return NeighborCounts::new();
    };

    let step = resolution.step();
    let area = bounds.expanded(step);
    let stride = resolution.get() as usize;

    let mut counts = NeighborCounts::new();
    for y in (area.min_y..=area.max_y).step_by(stride) {
        for x in (area.min_x..=area.max_x).step_by(stride) {
            let cell = Cell::new(x, y);
            let n = cell.neighbors(step).filter(|c| cells.contains(c)).count() as u8;
            if n > 0 {
                counts.insert(cell, n);
            }
        }
    }

    counts
}
