use crate::constants::G0;
use crate::models::aircraft::AircraftProperties;

pub fn kinetic_energy<T: AircraftProperties>(aircraft: &T, velocity: f64) -> f64 {
    0.5 * aircraft.mass() * velocity * velocity
}

/// Negative altitudes are accepted and give negative energy.
pub fn potential_energy<T: AircraftProperties>(aircraft: &T, altitude: f64) -> f64 {
    aircraft.mass() * G0 * altitude
}

pub fn total_energy<T: AircraftProperties>(aircraft: &T, velocity: f64, altitude: f64) -> f64 {
    kinetic_energy(aircraft, velocity) + potential_energy(aircraft, altitude)
}

/// Energy height: total energy per unit weight, in metres. Independent of mass.
pub fn specific_energy(velocity: f64, altitude: f64) -> f64 {
    altitude + velocity * velocity / (2.0 * G0)
}
