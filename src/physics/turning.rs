use crate::constants::G0;
use crate::models::aircraft::AircraftProperties;
use crate::models::ModelErrors;

/// Simplified turn rate in rad/s. Falls as speed rises.
pub fn turn_rate<T: AircraftProperties>(aircraft: &T, velocity: f64) -> Result<f64, ModelErrors> {
    if velocity == 0.0 {
        return Err(ModelErrors::ZeroTurnVelocity);
    }
    Ok(aircraft.lift_coefficient() / (velocity * aircraft.drag_coefficient()))
}

/// Simplified turn radius in metres. Grows with the square of speed.
pub fn turn_radius<T: AircraftProperties>(aircraft: &T, velocity: f64) -> f64 {
    velocity.powi(2) / (aircraft.lift_coefficient() * G0)
}

/// Heading increment over one step, in radians.
///
/// Only the increment is returned; nothing accumulates it into a heading.
pub fn update_orientation<T: AircraftProperties>(
    aircraft: &T,
    velocity: f64,
    dt: f64,
    turning: bool,
) -> Result<f64, ModelErrors> {
    if !turning {
        return Ok(0.0);
    }
    Ok(turn_rate(aircraft, velocity)? * dt)
}
