/// Scheduler gates simulation ticks to a fixed rate independent of frame rate.
/// Frame time is accumulated and one tick is released per elapsed interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scheduler {
    interval: f32,
    accumulator: f32,
}

impl Scheduler {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    pub const fn interval(&self) -> f32 {
        self.interval
    }

    /// Add a frame's elapsed time; returns true when a tick is due.
    ///
    /// At most one tick per frame. Leftover time beyond one interval is
    /// dropped so a long stall does not cause a burst of catch-up ticks.
    pub fn advance(&mut self, delta_time: f32) -> bool {
        self.accumulator += delta_time;
        if self.accumulator < self.interval {
            return false;
        }
        self.accumulator = (self.accumulator - self.interval).min(self.interval);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_at_interval() {
        let mut scheduler = Scheduler::new(0.1);
        assert!(!scheduler.advance(0.05));
        assert!(scheduler.advance(0.06));
        assert!(!scheduler.advance(0.02));
    }

    #[test]
    fn test_long_stall_does_not_burst() {
        let mut scheduler = Scheduler::new(0.1);
        assert!(scheduler.advance(5.0));
        assert!(scheduler.advance(0.0));
        assert!(!scheduler.advance(0.0));
    }
}
