pub mod aircraft;
pub mod model_errors;
pub mod state;

pub use aircraft::{Aircraft, AircraftProperties};
pub use model_errors::ModelErrors;
pub use state::{StepRecord, Trajectory, TrajectoryState};
