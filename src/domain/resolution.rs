use super::Cell;
use crate::error::ConfigError;

/// Resolution is the pixel side length of one cell.
/// Always a positive power of two; it only ever shrinks during a session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Resolution(u32);

impl Resolution {
    /// Smallest resolution a grid can be rescaled to
    pub const MIN: Resolution = Resolution(1);

    pub fn new(size: u32) -> Result<Self, ConfigError> {
        if size.is_power_of_two() {
            Ok(Self(size))
        } else {
            Err(ConfigError::InvalidResolution(size))
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Distance between neighboring cell coordinates
    pub const fn step(self) -> i64 {
        self.0 as i64
    }

    /// Half of this resolution, or `None` once single-pixel cells are reached
    pub const fn halved(self) -> Option<Self> {
        if self.0 > 1 { Some(Self(self.0 / 2)) } else { None }
    }

    /// Snap a pixel coordinate to the cell containing it.
    /// `floor(px / r) * r` on each axis.
    pub const fn snap(self, px: i64, py: i64) -> Cell {
        let r = self.step();
        Cell::new(px.div_euclid(r) * r, py.div_euclid(r) * r)
    }

    /// Whether the cell sits on this resolution's lattice
    pub const fn is_aligned(self, cell: Cell) -> bool {
        let r = self.step();
        cell.x.rem_euclid(r) == 0 && cell.y.rem_euclid(r) == 0
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self(32)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}
