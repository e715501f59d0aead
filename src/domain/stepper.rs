use std::collections::HashSet;

use super::{Algorithm, Cell, CellState, Resolution, SparseGrid};

/// Result of advancing one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub cells: HashSet<Cell>,
    /// True iff the new generation is identical to the previous one
    pub stable: bool,
}

/// Compute the next generation of `cells`.
///
/// Only cells present in the neighbor-count map can be alive afterwards:
/// a live cell absent from it has no neighbors and dies.
pub fn step(cells: &HashSet<Cell>, resolution: Resolution, algorithm: Algorithm) -> StepOutcome {
    if cells.is_empty() {
        return StepOutcome { cells: HashSet::new(), stable: true };
    }

    let next: HashSet<Cell> = algorithm
        .count(cells, resolution)
        .into_iter()
        .filter(|(cell, n)| CellState::from_alive(cells.contains(cell)).evolve(*n).is_alive())
        .map(|(cell, _)| cell)
        .collect();

    let stable = next == *cells;
    StepOutcome { cells: next, stable }
}

impl SparseGrid {
    /// Replace the live set with its next generation.
    /// Returns whether the generation was stable.
    pub fn advance(&mut self, algorithm: Algorithm) -> bool {
        let outcome = step(self.cells(), self.resolution(), algorithm);
        self.replace_cells(outcome.cells);
        outcome.stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn r32() -> Resolution {
        Resolution::new(32).unwrap()
    }

    fn set(cells: &[(i64, i64)]) -> HashSet<Cell> {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_blinker_rotates() {
        let horizontal = set(&[(0, 0), (32, 0), (64, 0)]);

        for algorithm in Algorithm::all() {
            let outcome = step(&horizontal, r32(), algorithm);
            assert_eq!(outcome.cells, set(&[(32, -32), (32, 0), (32, 32)]), "{algorithm}");
            assert!(!outcome.stable);

            let back = step(&outcome.cells, r32(), algorithm);
            assert_eq!(back.cells, horizontal);
        }
    }

    #[test]
    fn test_block_is_stable() {
        let block = set(&[(0, 0), (32, 0), (0, 32), (32, 32)]);
        let outcome = step(&block, r32(), Algorithm::Sparse);

        assert_eq!(outcome.cells, block);
        assert!(outcome.stable);
    }

    #[test]
    fn test_empty_is_stable() {
        let outcome = step(&HashSet::new(), r32(), Algorithm::Naive);
        assert!(outcome.cells.is_empty());
        assert!(outcome.stable);
    }

    #[test]
    fn test_birth_with_three_neighbors() {
        // L-shape: (32, 32) is dead with exactly 3 live neighbors
        let cells = set(&[(0, 0), (32, 0), (0, 32)]);
        let outcome = step(&cells, r32(), Algorithm::Sparse);
        assert!(outcome.cells.contains(&Cell::new(32, 32)));
        assert!(!outcome.stable);
    }

    #[test]
    fn test_lonely_and_crowded_cells_die() {
        // Single cell: 0 neighbors
        assert!(step(&set(&[(0, 0)]), r32(), Algorithm::Sparse).cells.is_empty());

        // Domino: each has 1 neighbor
        assert!(step(&set(&[(0, 0), (32, 0)]), r32(), Algorithm::Sparse).cells.is_empty());

        // Plus sign: center has 4 neighbors
        let plus = set(&[(0, 0), (32, 0), (-32, 0), (0, 32), (0, -32)]);
        let outcome = step(&plus, r32(), Algorithm::Sparse);
        assert!(!outcome.cells.contains(&Cell::new(0, 0)));
    }

    #[test]
    fn test_advance_updates_grid() {
        let mut grid = SparseGrid::from_cells(r32(), set(&[(0, 0), (32, 0), (64, 0)]));
        assert!(!grid.advance(Algorithm::SparseParallel));
        assert!(grid.contains(Cell::new(32, -32)));
        assert_eq!(grid.len(), 3);
    }

    fn arb_cells() -> impl Strategy<Value = HashSet<Cell>> {
        prop::collection::hash_set((-8i64..8, -8i64..8), 0..40)
            .prop_map(|raw| raw.into_iter().map(|(x, y)| Cell::new(x * 32, y * 32)).collect())
    }

    proptest! {
        #[test]
        fn prop_step_is_deterministic(cells in arb_cells()) {
            let a = step(&cells, r32(), Algorithm::Sparse);
            let b = step(&cells, r32(), Algorithm::Sparse);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_stable_iff_unchanged(cells in arb_cells()) {
            let outcome = step(&cells, r32(), Algorithm::Sparse);
            prop_assert_eq!(outcome.stable, outcome.cells == cells);
        }

        #[test]
        fn prop_rule_applied_per_cell(cells in arb_cells()) {
            let outcome = step(&cells, r32(), Algorithm::Naive);
            for y in -10i64..10 {
                for x in -10i64..10 {
                    let cell = Cell::new(x * 32, y * 32);
                    let n = cell.neighbors(32).filter(|c| cells.contains(c)).count();
                    let alive = cells.contains(&cell);
                    let expected = n == 3 || (alive && n == 2);
                    prop_assert_eq!(outcome.cells.contains(&cell), expected);
                }
            }
        }
    }
}
