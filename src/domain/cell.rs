/// Cell is a grid square identified by its pixel-space coordinate.
/// Coordinates are always multiples of the resolution the cell lives at.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

/// Offsets of the Moore neighborhood in resolution steps
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8 cells horizontally, vertically and diagonally adjacent,
    /// each one `step` away on the affected axes
    pub fn neighbors(self, step: i64) -> impl Iterator<Item = Cell> {
        MOORE_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| Cell::new(self.x + dx * step, self.y + dy * step))
    }

    /// Shift by whole resolution steps
    pub const fn offset(self, dx: i64, dy: i64, step: i64) -> Self {
        Self::new(self.x + dx * step, self.y + dy * step)
    }

    /// Divide both coordinates by `factor`, rounding toward negative infinity
    pub const fn scaled_down(self, factor: i64) -> Self {
        Self::new(self.x.div_euclid(factor), self.y.div_euclid(factor))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Alive or dead, as seen by the transition rule.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }

    /// Conway's rules (B3/S23):
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}
