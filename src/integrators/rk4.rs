use super::Integrator;
use crate::physics::dynamics::EquationsOfMotion;

pub struct RK4<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> RK4<T> {
    pub fn new(eom: T) -> Self {
        RK4 { eom }
    }
}

impl<T: EquationsOfMotion> Integrator for RK4<T>
where
    T::State: Clone + std::ops::Add<Output = T::State> + std::ops::Mul<f64, Output = T::State>,
{
    type State = T::State;

    fn integrate(&self, state: &T::State, dt: f64) -> T::State {
        let half = dt / 2.0;

        let k1 = self.eom.compute_derivative(state);
        let k2 = self
            .eom
            .compute_derivative(&(state.clone() + k1.clone() * half));
        let k3 = self
            .eom
            .compute_derivative(&(state.clone() + k2.clone() * half));
        let k4 = self.eom.compute_derivative(&(state.clone() + k3.clone() * dt));

        state.clone() + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct ExponentialDecay;

    impl EquationsOfMotion for ExponentialDecay {
        type State = f64;

        fn compute_derivative(&self, state: &f64) -> f64 {
            -state
        }
    }

    #[test]
    fn tracks_exponential_decay() {
        let rk4 = RK4::new(ExponentialDecay);
        let mut x = 1.0;
        for _ in 0..100 {
            x = rk4.integrate(&x, 0.01);
        }
        assert_relative_eq!(x, (-1.0_f64).exp(), max_relative = 1e-9);
    }
}
