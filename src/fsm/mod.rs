pub mod flight_phases;
pub mod state_machine;
