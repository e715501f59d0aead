//! Algorithm enum for selecting the neighbor-counting implementation.
//!
//! All variants produce identical generations; they differ only in cost.

use std::collections::HashSet;

use super::neighbors::{self, NeighborCounts};
use super::{Cell, Resolution};

/// Available neighbor-counting strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Algorithm {
    /// Accumulate counts from the neighbors of live cells, serial
    #[default]
    Sparse,
    /// Sparse accumulation split across rayon workers
    SparseParallel,
    /// Scan every cell of the bounding box, O(area)
    Naive,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sparse, Algorithm::SparseParallel, Algorithm::Naive]
    }

    /// Display name for the status overlay
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Sparse",
            Algorithm::SparseParallel => "Sparse+Par",
            Algorithm::Naive => "Naive",
        }
    }

    /// Next algorithm in `all()` order, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|a| *a == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Dispatch to the selected counting implementation
    pub fn count(&self, cells: &HashSet<Cell>, resolution: Resolution) -> NeighborCounts {
        match self {
            Algorithm::Sparse => neighbors::count_live_neighbors(cells, resolution),
            Algorithm::SparseParallel => neighbors::count_live_neighbors_parallel(cells, resolution),
            Algorithm::Naive => neighbors::count_live_neighbors_naive(cells, resolution),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
