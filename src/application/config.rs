use clap::Parser;

use crate::domain::{Algorithm, ClusterFill, Resolution, Viewport, ZoomController};
use crate::error::ConfigError;

/// Conway's Game of Life on an unbounded grid that zooms out as it grows.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Starting cell side length in pixels (power of two)
    #[arg(short, long, default_value_t = 32)]
    pub resolution: u32,

    /// Simulation ticks per second
    #[arg(short, long, default_value_t = 10.0)]
    pub tick_rate: f32,

    /// Fewest cells seeded by one click on a dead cell
    #[arg(long, default_value_t = 5)]
    pub cluster_min: u32,

    /// Most cells seeded by one click on a dead cell
    #[arg(long, default_value_t = 20)]
    pub cluster_max: u32,

    /// How many cells away from the click a seeded cell may land
    #[arg(long, default_value_t = 2)]
    pub cluster_spread: u32,

    /// Zoom out once live cells exceed this percentage of the viewport
    #[arg(long, default_value_t = 5.0)]
    pub density_threshold: f64,

    /// Camera pan in pixels per tick while an arrow key is held
    #[arg(long, default_value_t = 5)]
    pub pan_step: u32,

    /// Neighbor-counting strategy
    #[arg(short, long, value_enum, default_value_t = Algorithm::Sparse)]
    pub algorithm: Algorithm,

    /// Seed for cluster fills; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            resolution: 32,
            tick_rate: 10.0,
            cluster_min: 5,
            cluster_max: 20,
            cluster_spread: 2,
            density_threshold: 5.0,
            pan_step: 5,
            algorithm: Algorithm::Sparse,
            seed: None,
        }
    }
}

impl Config {
    pub fn resolution(&self) -> Result<Resolution, ConfigError> {
        Resolution::new(self.resolution)
    }

    pub fn cluster_fill(&self) -> Result<ClusterFill, ConfigError> {
        ClusterFill::new(self.cluster_min, self.cluster_max, self.cluster_spread)
    }

    pub fn zoom(&self) -> Result<ZoomController, ConfigError> {
        ZoomController::new(self.density_threshold)
    }

    pub fn viewport(&self) -> Result<Viewport, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(Viewport::new(self.width, self.height))
    }

    pub fn tick_interval(&self) -> Result<f32, ConfigError> {
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(ConfigError::InvalidTickRate(self.tick_rate));
        }
        Ok(1.0 / self.tick_rate)
    }

    pub fn pan_step(&self) -> Result<i64, ConfigError> {
        match self.pan_step {
            0 => Err(ConfigError::ZeroPanStep),
            step => Ok(i64::from(step)),
        }
    }

    /// Check every field at once so startup fails before a window opens
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolution()?;
        self.cluster_fill()?;
        self.zoom()?;
        self.viewport()?;
        self.tick_interval()?;
        self.pan_step()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_parse_matches_default() {
        let parsed = Config::try_parse_from(["zoomlife"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.resolution, default.resolution);
        assert_eq!(parsed.cluster_max, default.cluster_max);
        assert_eq!(parsed.algorithm, default.algorithm);
        assert_eq!(parsed.seed, None);
    }

    #[test]
    fn test_parse_flags() {
        let parsed = Config::try_parse_from([
            "zoomlife", "--resolution", "64", "--tick-rate", "60", "--algorithm", "sparse-parallel", "--seed", "9",
        ])
        .unwrap();
        assert_eq!(parsed.resolution, 64);
        assert_eq!(parsed.tick_rate, 60.0);
        assert_eq!(parsed.algorithm, Algorithm::SparseParallel);
        assert_eq!(parsed.seed, Some(9));
    }

    #[test]
    fn test_validation_errors() {
        let bad = Config { resolution: 24, ..Config::default() };
        assert_eq!(bad.validate(), Err(ConfigError::InvalidResolution(24)));

        let bad = Config { cluster_min: 9, cluster_max: 3, ..Config::default() };
        assert_eq!(bad.validate(), Err(ConfigError::InvalidClusterRange { min: 9, max: 3 }));

        let bad = Config { tick_rate: 0.0, ..Config::default() };
        assert!(matches!(bad.validate(), Err(ConfigError::InvalidTickRate(_))));

        let bad = Config { height: 0, ..Config::default() };
        assert!(matches!(bad.validate(), Err(ConfigError::EmptyViewport { .. })));

        let bad = Config { pan_step: 0, ..Config::default() };
        assert_eq!(bad.validate(), Err(ConfigError::ZeroPanStep));
    }
}
