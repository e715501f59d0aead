//! Automatic zoom-out.
//!
//! When live cells cover more than a threshold share of the viewport, the
//! resolution is halved so the pattern keeps fitting on screen. Cells are
//! remapped to the finer lattice and the camera is recentred on them.

use tracing::{info, warn};

use super::{SparseGrid, Viewport};
use crate::error::ConfigError;

/// Outcome of a triggered rescale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rescale {
    /// Remapped cells at the halved resolution
    pub grid: SparseGrid,
    /// Camera offset that centres the remapped cells, if any remain
    pub camera_offset: Option<(i64, i64)>,
}

/// Watches live-cell density and decides when to zoom out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomController {
    threshold_percent: f64,
}

impl ZoomController {
    pub fn new(threshold_percent: f64) -> Result<Self, ConfigError> {
        if !threshold_percent.is_finite() || threshold_percent <= 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold_percent));
        }
        Ok(Self { threshold_percent })
    }

    pub const fn threshold_percent(&self) -> f64 {
        self.threshold_percent
    }

    /// Percentage of viewport cells that are alive.
    /// Infinite when the viewport holds no whole cell but the grid is populated.
    pub fn density_percent(grid: &SparseGrid, viewport: Viewport) -> f64 {
        let live = grid.len() as f64;
        match viewport.capacity(grid.resolution()) {
            0 if grid.is_empty() => 0.0,
            0 => f64::INFINITY,
            capacity => live / capacity as f64 * 100.0,
        }
    }

    /// Whether density is strictly above the threshold
    pub fn should_rescale(&self, grid: &SparseGrid, viewport: Viewport) -> bool {
        !grid.is_empty() && Self::density_percent(grid, viewport) > self.threshold_percent
    }

    /// Halve the resolution once if the grid is too dense.
    ///
    /// At most one halving per call; a grid that stays too dense triggers
    /// again on the next check. Returns `None` when nothing changes.
    pub fn maybe_rescale(&self, grid: &SparseGrid, viewport: Viewport) -> Option<Rescale> {
        if !self.should_rescale(grid, viewport) {
            return None;
        }

        let old = grid.resolution();
        let Some(new) = old.halved() else {
            warn!(population = grid.len(), "density over threshold at minimum resolution");
            return None;
        };

        let remapped = grid.remapped(new);
        let (half_w, half_h) = viewport.half_extent();
        let camera_offset = remapped.bounding_box().map(|b| {
            let (cx, cy) = b.center();
            (cx - half_w, cy - half_h)
        });

        info!(
            from = %old,
            to = %new,
            before = grid.len(),
            after = remapped.len(),
            "zoomed out"
        );

        Some(Rescale { grid: remapped, camera_offset })
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self { threshold_percent: 5.0 }
    }
}
