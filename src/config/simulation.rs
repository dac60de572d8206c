use crate::constants::*;
use crate::fsm::state_machine::PhaseSchedule;

/// Inputs of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub initial_velocity: f64, // m/s
    pub initial_altitude: f64, // m
    pub dt: f64,               // s
    pub total_steps: u32,
    pub climb_rate: f64, // m per climb step
    pub schedule: PhaseSchedule,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_velocity: INITIAL_VELOCITY,
            initial_altitude: INITIAL_ALTITUDE,
            dt: TIME_STEP,
            total_steps: TOTAL_STEPS,
            climb_rate: CLIMB_RATE,
            schedule: PhaseSchedule::default(),
        }
    }
}
