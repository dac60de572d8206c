use super::flight_phases::FlightPhase;
use crate::constants::{CLIMB_END_TIME, TURN_END_TIME};
use crate::models::TrajectoryState;
use log::info;

/// Time thresholds separating the flight phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSchedule {
    pub climb_until: u32, // s, exclusive
    pub turn_until: u32,  // s, exclusive
}

impl Default for PhaseSchedule {
    fn default() -> Self {
        Self {
            climb_until: CLIMB_END_TIME,
            turn_until: TURN_END_TIME,
        }
    }
}

impl PhaseSchedule {
    pub fn phase_at(&self, elapsed_time: u32) -> FlightPhase {
        if elapsed_time < self.climb_until {
            FlightPhase::Climb
        } else if elapsed_time < self.turn_until {
            FlightPhase::Turn
        } else {
            FlightPhase::Cruise
        }
    }
}

/// Tracks the phase of a running simulation so transitions can be reported.
///
/// The phase itself is always recomputed from elapsed time; the machine only
/// remembers the previous one.
pub struct FlightPhaseFSM {
    schedule: PhaseSchedule,
    current_phase: Option<FlightPhase>,
    last_phase_change: u32,
}

impl FlightPhaseFSM {
    pub fn new(schedule: PhaseSchedule) -> Self {
        Self {
            schedule,
            current_phase: None,
            last_phase_change: 0,
        }
    }

    pub fn get_current_phase(&self) -> Option<FlightPhase> {
        self.current_phase
    }

    pub fn get_last_phase_change(&self) -> u32 {
        self.last_phase_change
    }

    fn transition_to(&mut self, new_phase: FlightPhase, time: u32) {
        match self.current_phase {
            Some(current) if current == new_phase => return,
            Some(current) => info!("Phase transition at t={}s: {} -> {}", time, current, new_phase),
            None => info!("Starting in {} phase at t={}s", new_phase, time),
        }
        self.current_phase = Some(new_phase);
        self.last_phase_change = time;
    }

    pub fn evaluate_transition(&mut self, state: &TrajectoryState) -> FlightPhase {
        let phase = self.schedule.phase_at(state.elapsed_time);
        self.transition_to(phase, state.elapsed_time);
        phase
    }
}
