use rand::Rng;

use super::{Cell, Resolution};
use crate::error::ConfigError;

/// Random cluster seeding used when a dead cell is toggled on.
///
/// Instead of a single cell, `min..=max` cells are scattered at uniform
/// offsets within `spread` resolution steps of the clicked cell on each axis.
/// Offsets may repeat, so fewer than the drawn count of distinct cells can
/// result, but never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClusterFill {
    min: u32,
    max: u32,
    spread: u32,
}

impl ClusterFill {
    pub fn new(min: u32, max: u32, spread: u32) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidClusterRange { min, max });
        }
        Ok(Self { min, max, spread })
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub const fn spread(&self) -> u32 {
        self.spread
    }

    /// Generate cluster cells around `center`. May contain duplicates.
    pub fn cells<R: Rng>(&self, center: Cell, resolution: Resolution, rng: &mut R) -> Vec<Cell> {
        let count = rng.random_range(self.min..=self.max);
        let spread = i64::from(self.spread);
        let step = resolution.step();

        (0..count)
            .map(|_| {
                let dx = rng.random_range(-spread..=spread);
                let dy = rng.random_range(-spread..=spread);
                center.offset(dx, dy, step)
            })
            .collect()
    }
}

impl Default for ClusterFill {
    fn default() -> Self {
        Self { min: 5, max: 20, spread: 2 }
    }
}
