use crate::models::aircraft::AircraftProperties;
use crate::models::{StepRecord, Trajectory};
use crate::physics::energy::specific_energy;
use crate::sim::StepObserver;
use log::info;

pub fn format_step(record: &StepRecord) -> String {
    format!(
        "Time: {}s, Velocity: {:.2}m/s, Altitude: {}m, Kinetic Energy: {:.2}, Potential Energy: {:.2}, Turn Radius: {:.2}m, Angle Change: {:.2} radians",
        record.time,
        record.velocity,
        record.altitude,
        record.kinetic_energy,
        record.potential_energy,
        record.turn_radius,
        record.angle_change,
    )
}

/// Prints one line per step to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl StepObserver for ConsoleReporter {
    fn on_step(&mut self, record: &StepRecord) {
        println!("{}", format_step(record));
    }
}

pub fn log_summary<T: AircraftProperties>(aircraft: &T, trajectory: &Trajectory) {
    let Some(last) = trajectory.last() else {
        info!("Trajectory is empty, nothing to summarise");
        return;
    };

    info!(
        "Completed {} steps ({} kg aircraft, {} N thrust)",
        trajectory.len(),
        aircraft.mass(),
        aircraft.engine_thrust()
    );
    info!("Final velocity: {:.2} m/s", last.velocity);
    if let Some(peak) = trajectory.peak_altitude() {
        info!("Peak altitude: {:.2} m", peak);
    }
    info!(
        "Final total energy: {:.2} J (energy height {:.2} m)",
        last.total_energy(),
        specific_energy(last.velocity, last.altitude)
    );
}
