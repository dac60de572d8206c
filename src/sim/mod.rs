pub mod sim_errors;
pub mod simulator;

pub use sim_errors::SimulationErrors;
pub use simulator::{Simulator, StepObserver};
