use super::Resolution;

/// Pixel dimensions of the area the grid is drawn into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// How many cells of side `resolution` fit on screen.
    /// Integer division, so partially visible cells don't count.
    pub const fn capacity(&self, resolution: Resolution) -> u64 {
        let r = resolution.get() as u64;
        (self.width as u64 * self.height as u64) / (r * r)
    }

    /// Viewport center in pixels, rounded down
    pub const fn half_extent(&self) -> (i64, i64) {
        (self.width as i64 / 2, self.height as i64 / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_shrinks_with_resolution() {
        let vp = Viewport::new(640, 480);
        assert_eq!(vp.capacity(Resolution::new(32).unwrap()), 300);
        assert_eq!(vp.capacity(Resolution::new(16).unwrap()), 1200);
        assert_eq!(Viewport::new(10, 10).capacity(Resolution::new(32).unwrap()), 0);
    }

    #[test]
    fn test_half_extent() {
        assert_eq!(Viewport::new(641, 480).half_extent(), (320, 240));
    }
}
