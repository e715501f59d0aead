use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{Camera, Config, InputEvent};
use crate::domain::{Algorithm, ClusterFill, SparseGrid, Viewport, ZoomController};
use crate::error::ConfigError;

/// SimulationState owns everything the main loop mutates.
/// This is the application layer that coordinates domain logic:
/// live cells and their resolution, the camera, and the running flag.
pub struct SimulationState {
    pub grid: SparseGrid,
    pub camera: Camera,
    pub algorithm: Algorithm,
    pub viewport: Viewport,
    pub is_running: bool,
    pub generation: u64,
    pub last_step_time_ms: f32,
    zoom: ZoomController,
    fill: ClusterFill,
    pan_step: i64,
    rng: StdRng,
}

impl SimulationState {
    /// Create an empty simulation from validated configuration
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            grid: SparseGrid::new(config.resolution()?),
            camera: Camera::new(),
            algorithm: config.algorithm,
            viewport: config.viewport()?,
            is_running: false,
            generation: 0,
            last_step_time_ms: 0.0,
            zoom: config.zoom()?,
            fill: config.cluster_fill()?,
            pan_step: config.pan_step()?,
            rng,
        })
    }

    /// Replace the live cells (builder pattern)
    pub fn with_grid(mut self, grid: SparseGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Begin continuous stepping. There is no pause; running stops
    /// by itself once a generation is stable.
    pub fn start(mut self) -> Self {
        if !self.is_running {
            info!(generation = self.generation, population = self.grid.len(), "simulation started");
        }
        self.is_running = true;
        self
    }

    /// Track the drawable area; capacity for zoom checks follows it.
    /// A zero-sized window (minimised) keeps the last real size.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }
        self.viewport = viewport;
    }

    /// Toggle the cell under a screen position
    pub fn toggle_at(&mut self, screen_x: f32, screen_y: f32) {
        let cell = self.camera.screen_to_grid(screen_x, screen_y, self.grid.resolution());
        self.grid.toggle(cell, &self.fill, &mut self.rng);
    }

    /// Apply one discrete input event
    pub fn apply(mut self, event: InputEvent) -> Self {
        match event {
            InputEvent::Start => return self.start(),
            InputEvent::Toggle { x, y } => self.toggle_at(x, y),
            InputEvent::ResetCamera => self.camera.reset(),
            InputEvent::CycleAlgorithm => {
                self.algorithm = self.algorithm.next();
                debug!(algorithm = %self.algorithm, "algorithm changed");
            }
            InputEvent::Quit => {}
        }
        self
    }

    /// Run one simulation cycle: pan, step if running, then zoom check
    pub fn tick(mut self, pan: (i64, i64)) -> Self {
        self.camera.pan(pan.0 * self.pan_step, pan.1 * self.pan_step);

        if self.is_running {
            self = self.step();
        }

        if let Some(rescale) = self.zoom.maybe_rescale(&self.grid, self.viewport) {
            self.grid = rescale.grid;
            if let Some(offset) = rescale.camera_offset {
                self.camera.recenter(offset);
            }
        }

        self
    }

    /// Advance one generation, halting when nothing changed
    fn step(mut self) -> Self {
        let start = std::time::Instant::now();
        let before = self.grid.len();

        let stable = self.grid.advance(self.algorithm);

        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        debug!(
            generation = self.generation,
            before,
            after = self.grid.len(),
            ms = self.last_step_time_ms,
            "step"
        );

        if stable {
            self.is_running = false;
            info!(generation = self.generation, population = self.grid.len(), "simulation stable, halted");
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, Resolution};

    fn config() -> Config {
        Config {
            width: 640,
            height: 480,
            seed: Some(42),
            ..Config::default()
        }
    }

    fn state_with(cells: &[(i64, i64)]) -> SimulationState {
        let grid = SparseGrid::from_cells(
            Resolution::new(32).unwrap(),
            cells.iter().copied().map(Cell::from).collect(),
        );
        SimulationState::new(&config()).unwrap().with_grid(grid)
    }

    #[test]
    fn test_idle_tick_does_not_step() {
        let state = state_with(&[(0, 0), (32, 0), (64, 0)]).tick((0, 0));
        assert_eq!(state.generation, 0);
        assert!(state.grid.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_running_blinker_keeps_running() {
        let state = state_with(&[(0, 0), (32, 0), (64, 0)]).start().tick((0, 0));
        assert_eq!(state.generation, 1);
        assert!(state.is_running);
        assert!(state.grid.contains(Cell::new(32, -32)));
    }

    #[test]
    fn test_stable_block_halts() {
        let state = state_with(&[(0, 0), (32, 0), (0, 32), (32, 32)])
            .apply(InputEvent::Start)
            .tick((0, 0));
        assert_eq!(state.generation, 1);
        assert!(!state.is_running);
    }

    #[test]
    fn test_tick_pans_by_step() {
        let state = state_with(&[]).tick((1, -1)).tick((1, 0));
        assert_eq!((state.camera.offset_x, state.camera.offset_y), (10, -5));
    }

    #[test]
    fn test_toggle_through_camera() {
        let mut state = state_with(&[(32, 32)]);
        state.camera.recenter((32, 32));

        // Screen (5, 5) plus camera (32, 32) falls in cell (32, 32)
        state = state.apply(InputEvent::Toggle { x: 5.0, y: 5.0 });
        assert!(state.grid.is_empty());

        state = state.apply(InputEvent::Toggle { x: 5.0, y: 5.0 });
        assert!(!state.grid.is_empty());
        assert!(state.grid.len() <= 20);
    }

    #[test]
    fn test_dense_grid_rescales_on_tick() {
        let cells: Vec<(i64, i64)> = (0..16).map(|i| (i * 32, 0)).collect();
        let state = state_with(&cells).tick((0, 0));

        assert_eq!(state.grid.resolution().get(), 16);
        assert_eq!(state.grid.len(), 16);
        assert_eq!((state.camera.offset_x, state.camera.offset_y), (120 - 320, -240));
    }

    #[test]
    fn test_minimised_window_keeps_viewport() {
        let mut state = state_with(&[(0, 0)]);
        state.resize(Viewport::new(0, 0));
        assert_eq!(state.viewport, Viewport::new(640, 480));

        state.resize(Viewport::new(800, 600));
        assert_eq!(state.viewport, Viewport::new(800, 600));
    }

    #[test]
    fn test_seeded_toggles_are_reproducible() {
        let a = state_with(&[]).apply(InputEvent::Toggle { x: 0.0, y: 0.0 });
        let b = state_with(&[]).apply(InputEvent::Toggle { x: 0.0, y: 0.0 });
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn test_cycle_algorithm_and_reset() {
        let mut state = state_with(&[]).tick((1, 1));
        state = state.apply(InputEvent::CycleAlgorithm).apply(InputEvent::ResetCamera);
        assert_eq!(state.algorithm, Algorithm::SparseParallel);
        assert_eq!(state.camera, Camera::default());
    }
}
