use crate::models::aircraft::AircraftProperties;

pub struct DemoJet;

impl DemoJet {
    pub const MASS: f64 = 10_000.0; // kg
    pub const ENGINE_THRUST: f64 = 20_000.0; // N
    pub const C_D: f64 = 0.02;
    pub const C_L: f64 = 0.3;
}

impl AircraftProperties for DemoJet {
    fn mass(&self) -> f64 {
        Self::MASS
    }

    fn engine_thrust(&self) -> f64 {
        Self::ENGINE_THRUST
    }

    fn drag_coefficient(&self) -> f64 {
        Self::C_D
    }

    fn lift_coefficient(&self) -> f64 {
        Self::C_L
    }
}
