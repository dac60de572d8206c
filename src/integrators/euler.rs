use super::Integrator;
use crate::physics::dynamics::EquationsOfMotion;

/// Explicit first-order Euler. Overshoots when `dt` is large relative to the
/// stiffness of the equations of motion.
pub struct Euler<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> Euler<T> {
    pub fn new(eom: T) -> Self {
        Euler { eom }
    }
}

impl<T: EquationsOfMotion> Integrator for Euler<T>
where
    T::State: Clone + std::ops::Add<Output = T::State> + std::ops::Mul<f64, Output = T::State>,
{
    type State = T::State;

    fn integrate(&self, state: &T::State, dt: f64) -> T::State {
        let k1 = self.eom.compute_derivative(state);
        state.clone() + k1 * dt
    }
}
