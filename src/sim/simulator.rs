use crate::config::simulation::SimulationConfig;
use crate::fsm::state_machine::FlightPhaseFSM;
use crate::models::aircraft::AircraftProperties;
use crate::models::{ModelErrors, StepRecord, Trajectory, TrajectoryState};
use crate::physics::dynamics::update_velocity;
use crate::physics::energy::{kinetic_energy, potential_energy};
use crate::physics::turning::{turn_radius, update_orientation};
use log::debug;

/// Live consumer of step records, called once per step in time order.
pub trait StepObserver {
    fn on_step(&mut self, record: &StepRecord);
}

impl<F: FnMut(&StepRecord)> StepObserver for F {
    fn on_step(&mut self, record: &StepRecord) {
        self(record)
    }
}

/// Drives one aircraft through the climb, turn and cruise phases.
///
/// Elapsed time counts steps, so it is in seconds only for the default `dt` of 1 s.
pub struct Simulator<'a, T: AircraftProperties> {
    aircraft: &'a T,
    config: SimulationConfig,
    state: TrajectoryState,
    fsm: FlightPhaseFSM,
}

impl<'a, T: AircraftProperties> Simulator<'a, T> {
    pub fn new(aircraft: &'a T, config: SimulationConfig) -> Self {
        Self {
            aircraft,
            state: TrajectoryState::new(config.initial_velocity, config.initial_altitude),
            fsm: FlightPhaseFSM::new(config.schedule),
            config,
        }
    }

    pub fn state(&self) -> &TrajectoryState {
        &self.state
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Advances the trajectory by one step. On error the state is left untouched.
    pub fn step(&mut self) -> Result<StepRecord, ModelErrors> {
        let phase = self.fsm.evaluate_transition(&self.state);
        let dt = self.config.dt;

        let velocity = update_velocity(self.aircraft, self.state.velocity, dt)?;
        let altitude = if phase.is_climbing() {
            self.state.altitude + self.config.climb_rate
        } else {
            self.state.altitude
        };
        let angle_change = update_orientation(self.aircraft, velocity, dt, phase.is_turning())?;

        let record = StepRecord {
            time: self.state.elapsed_time,
            phase,
            velocity,
            altitude,
            kinetic_energy: kinetic_energy(self.aircraft, velocity),
            potential_energy: potential_energy(self.aircraft, altitude),
            turn_radius: turn_radius(self.aircraft, velocity),
            angle_change,
        };

        self.state.velocity = velocity;
        self.state.altitude = altitude;
        self.state.elapsed_time += 1;

        Ok(record)
    }

    pub fn run(self) -> Result<Trajectory, ModelErrors> {
        self.run_with(|_: &StepRecord| {})
    }

    pub fn run_with<O: StepObserver>(mut self, mut observer: O) -> Result<Trajectory, ModelErrors> {
        let mut trajectory = Trajectory::with_capacity(self.config.total_steps as usize);

        for _ in 0..self.config.total_steps {
            let record = self.step()?;
            debug!("t={}s phase={} v={:.3}", record.time, record.phase, record.velocity);
            observer.on_step(&record);
            trajectory.push(record);
        }

        Ok(trajectory)
    }
}
