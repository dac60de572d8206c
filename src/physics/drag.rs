use crate::models::aircraft::AircraftProperties;

/// Quadratic drag opposing the direction of flight, in newtons.
pub fn drag_force<T: AircraftProperties>(aircraft: &T, velocity: f64) -> f64 {
    0.5 * aircraft.drag_coefficient() * velocity.powi(2)
}
