mod cell;
mod resolution;
mod bounds;
mod cluster;
mod sparse_grid;
mod algorithm;
mod viewport;
pub mod neighbors;
pub mod stepper;
pub mod zoom;

pub use cell::{Cell, CellState};
pub use resolution::Resolution;
pub use bounds::BoundingBox;
pub use cluster::ClusterFill;
pub use sparse_grid::SparseGrid;
pub use algorithm::Algorithm;
pub use viewport::Viewport;
pub use stepper::{step, StepOutcome};
pub use zoom::{Rescale, ZoomController};
