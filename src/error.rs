use thiserror::Error;

/// Errors raised while validating startup configuration.
/// The simulation itself has no failure modes once configured.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Resolution must be a positive power of two, got {0}")]
    InvalidResolution(u32),

    #[error("Invalid cluster size range {min}..={max}: need 1 <= min <= max")]
    InvalidClusterRange { min: u32, max: u32 },

    #[error("Tick rate must be positive and finite, got {0}")]
    InvalidTickRate(f32),

    #[error("Density threshold must be positive and finite, got {0}")]
    InvalidThreshold(f64),

    #[error("Window must have a non-zero size, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },

    #[error("Pan step must be at least one pixel")]
    ZeroPanStep,
}
