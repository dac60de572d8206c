pub mod euler;
pub mod rk4;

/// Advances a state by one fixed time step.
pub trait Integrator {
    type State;

    fn integrate(&self, state: &Self::State, dt: f64) -> Self::State;
}
