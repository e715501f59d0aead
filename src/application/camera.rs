use tracing::debug;

use crate::domain::{Cell, Resolution};

/// Camera tracks the pixel offset of the viewport over the infinite plane.
/// Independent of the simulation apart from rescale recentering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Camera {
    pub offset_x: i64,
    pub offset_y: i64,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pan camera
    pub fn pan(&mut self, dx: i64, dy: i64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Jump to an absolute offset
    pub fn recenter(&mut self, (x, y): (i64, i64)) {
        self.offset_x = x;
        self.offset_y = y;
    }

    /// Convert screen coordinates to the cell under them
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32, resolution: Resolution) -> Cell {
        let px = screen_x.floor() as i64 + self.offset_x;
        let py = screen_y.floor() as i64 + self.offset_y;
        resolution.snap(px, py)
    }

    /// Convert a cell to the screen position of its top-left corner
    pub fn grid_to_screen(&self, cell: Cell) -> (f32, f32) {
        ((cell.x - self.offset_x) as f32, (cell.y - self.offset_y) as f32)
    }

    /// Reset camera to the origin
    pub fn reset(&mut self) {
        debug!(x = self.offset_x, y = self.offset_y, "camera reset");
        *self = Self::default();
    }
}
