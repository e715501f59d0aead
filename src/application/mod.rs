mod camera;
mod config;
mod events;
mod scheduler;
mod simulation_state;

pub use camera::Camera;
pub use config::Config;
pub use events::{FrameInput, InputEvent};
pub use scheduler::Scheduler;
pub use simulation_state::SimulationState;
