// Domain layer - Core simulation logic
pub mod domain;

// Application layer - State ownership, configuration, scheduling
pub mod application;

// Infrastructure layer - Rendering, input
pub mod rendering;
pub mod input;

pub mod error;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Resolution, SparseGrid, ZoomController};
pub use application::{Camera, Config, SimulationState};
pub use error::ConfigError;
