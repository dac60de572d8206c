pub trait AircraftProperties {
    fn mass(&self) -> f64;
    fn engine_thrust(&self) -> f64;
    fn drag_coefficient(&self) -> f64;
    fn lift_coefficient(&self) -> f64;
}

/// Fixed physical parameters of one aircraft. Never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aircraft {
    mass: f64,
    engine_thrust: f64,
    drag_coefficient: f64,
    lift_coefficient: f64,
}

impl Aircraft {
    pub fn new(mass: f64, engine_thrust: f64, drag_coefficient: f64, lift_coefficient: f64) -> Self {
        Self {
            mass,
            engine_thrust,
            drag_coefficient,
            lift_coefficient,
        }
    }

    /// Snapshot of any aircraft preset as a runtime value.
    pub fn from_properties<T: AircraftProperties>(properties: &T) -> Self {
        Self::new(
            properties.mass(),
            properties.engine_thrust(),
            properties.drag_coefficient(),
            properties.lift_coefficient(),
        )
    }
}

impl AircraftProperties for Aircraft {
    fn mass(&self) -> f64 {
        self.mass
    }

    fn engine_thrust(&self) -> f64 {
        self.engine_thrust
    }

    fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    fn lift_coefficient(&self) -> f64 {
        self.lift_coefficient
    }
}
