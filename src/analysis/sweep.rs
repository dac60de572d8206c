use crate::constants::{SWEEP_MAX_SPEED, SWEEP_MIN_SPEED, SWEEP_SAMPLES};
use crate::models::aircraft::AircraftProperties;
use crate::models::ModelErrors;
use crate::physics::energy::kinetic_energy;
use crate::physics::turning::{turn_radius, turn_rate};
use serde::Serialize;

/// Energy and turn performance at one speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    #[serde(rename = "Speed (m/s)")]
    pub speed: f64,
    #[serde(rename = "Kinetic Energy (J)")]
    pub kinetic_energy: f64,
    #[serde(rename = "Turn Rate (rad/s)")]
    pub turn_rate: f64,
    #[serde(rename = "Turn Radius (m)")]
    pub turn_radius: f64,
}

/// `samples` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

pub fn speed_sweep<T: AircraftProperties>(
    aircraft: &T,
    min_speed: f64,
    max_speed: f64,
    samples: usize,
) -> Result<Vec<SweepPoint>, ModelErrors> {
    linspace(min_speed, max_speed, samples)
        .into_iter()
        .map(|speed| {
            Ok(SweepPoint {
                speed,
                kinetic_energy: kinetic_energy(aircraft, speed),
                turn_rate: turn_rate(aircraft, speed)?,
                turn_radius: turn_radius(aircraft, speed),
            })
        })
        .collect()
}

pub fn default_speed_sweep<T: AircraftProperties>(
    aircraft: &T,
) -> Result<Vec<SweepPoint>, ModelErrors> {
    speed_sweep(aircraft, SWEEP_MIN_SPEED, SWEEP_MAX_SPEED, SWEEP_SAMPLES)
}
