use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use super::{BoundingBox, Cell, ClusterFill, Resolution};

/// SparseGrid stores the set of alive cells on an unbounded plane.
/// Only live cells take memory; every cell is aligned to `resolution`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseGrid {
    cells: HashSet<Cell>,
    resolution: Resolution,
}

impl SparseGrid {
    /// Create an empty grid at the given resolution
    pub fn new(resolution: Resolution) -> Self {
        Self {
            cells: HashSet::new(),
            resolution,
        }
    }

    /// Build a grid from pre-computed cells (used for generation replacement)
    pub fn from_cells(resolution: Resolution, cells: HashSet<Cell>) -> Self {
        debug_assert!(cells.iter().all(|c| resolution.is_aligned(*c)));
        Self { cells, resolution }
    }

    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn cells(&self) -> &HashSet<Cell> {
        &self.cells
    }

    pub fn into_cells(self) -> HashSet<Cell> {
        self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Mark a single cell alive. Returns whether it was newly added.
    pub fn insert(&mut self, cell: Cell) -> bool {
        debug_assert!(self.resolution.is_aligned(cell));
        self.cells.insert(cell)
    }

    /// Remove a single cell. Returns whether it was alive.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    /// Replace every live cell at once, keeping the resolution
    pub fn replace_cells(&mut self, cells: HashSet<Cell>) {
        self.cells = cells;
    }

    /// Toggle the cell under the cursor.
    ///
    /// A live cell is removed on its own. A dead cell seeds a random
    /// cluster around itself instead of a single cell.
    pub fn toggle<R: Rng>(&mut self, cell: Cell, fill: &ClusterFill, rng: &mut R) {
        if self.remove(cell) {
            return;
        }

        let before = self.len();
        let cluster = fill.cells(cell, self.resolution, rng);
        self.extend(cluster);
        debug!(x = cell.x, y = cell.y, added = self.len() - before, "cluster fill");
    }

    /// Bounding box of the live cells, `None` when the grid is empty
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_cells(&self.cells)
    }

    /// Copy of this grid at a finer `resolution`.
    ///
    /// Every coordinate is divided by the scale factor with floor rounding.
    /// Cells that land on the same coordinate collapse into one.
    /// Aligned cells never collapse when the factor is 2.
    pub fn remapped(&self, resolution: Resolution) -> Self {
        let factor = i64::from(self.resolution.get() / resolution.get()).max(1);
        let cells = self.cells.iter().map(|c| c.scaled_down(factor)).collect();
        Self { cells, resolution }
    }
}

impl Extend<Cell> for SparseGrid {
    fn extend<T: IntoIterator<Item = Cell>>(&mut self, iter: T) {
        for cell in iter {
            self.insert(cell);
        }
    }
}
