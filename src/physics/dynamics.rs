use super::drag::drag_force;
use crate::integrators::euler::Euler;
use crate::integrators::rk4::RK4;
use crate::integrators::Integrator;
use crate::models::aircraft::AircraftProperties;
use crate::models::ModelErrors;

pub trait EquationsOfMotion {
    type State;

    fn compute_derivative(&self, state: &Self::State) -> Self::State;
}

/// Along-track acceleration under constant thrust and quadratic drag.
pub struct LongitudinalDynamics<'a, T: AircraftProperties> {
    aircraft: &'a T,
}

impl<'a, T: AircraftProperties> LongitudinalDynamics<'a, T> {
    pub fn new(aircraft: &'a T) -> Result<Self, ModelErrors> {
        if aircraft.mass() == 0.0 {
            return Err(ModelErrors::ZeroMass);
        }
        Ok(Self { aircraft })
    }
}

impl<T: AircraftProperties> EquationsOfMotion for LongitudinalDynamics<'_, T> {
    type State = f64;

    fn compute_derivative(&self, velocity: &f64) -> f64 {
        let net_force = self.aircraft.engine_thrust() - drag_force(self.aircraft, *velocity);
        net_force / self.aircraft.mass()
    }
}

/// One explicit Euler step of the velocity.
pub fn update_velocity<T: AircraftProperties>(
    aircraft: &T,
    velocity: f64,
    dt: f64,
) -> Result<f64, ModelErrors> {
    let integrator = Euler::new(LongitudinalDynamics::new(aircraft)?);
    Ok(integrator.integrate(&velocity, dt))
}

/// Same step taken with RK4, for measuring the truncation error of `update_velocity`.
pub fn reference_velocity<T: AircraftProperties>(
    aircraft: &T,
    velocity: f64,
    dt: f64,
) -> Result<f64, ModelErrors> {
    let integrator = RK4::new(LongitudinalDynamics::new(aircraft)?);
    Ok(integrator.integrate(&velocity, dt))
}

/// Speed at which drag balances thrust, if the aircraft has one.
pub fn terminal_velocity<T: AircraftProperties>(aircraft: &T) -> Option<f64> {
    let ratio = 2.0 * aircraft.engine_thrust() / aircraft.drag_coefficient();
    (ratio.is_finite() && ratio >= 0.0).then(|| ratio.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::aircraft::DemoJet;
    use crate::models::Aircraft;
    use approx::assert_abs_diff_eq;

    // Unit mass, thrust 100 N, drag v²: terminal velocity 10 m/s, dv/dt = 100 - v².
    fn stiff_aircraft() -> Aircraft {
        Aircraft::new(1.0, 100.0, 2.0, 1.0)
    }

    fn exact_from_rest(t: f64) -> f64 {
        10.0 * (10.0 * t).tanh()
    }

    #[test]
    fn velocity_step_at_initial_conditions() {
        let v = update_velocity(&DemoJet, 300.0, 1.0).unwrap();
        assert_abs_diff_eq!(v, 301.91, epsilon = 1e-9);
        assert_eq!(format!("{:.2}", v), "301.91");
    }

    #[test]
    fn velocity_step_rejects_zero_mass() {
        let aircraft = Aircraft::new(0.0, 20_000.0, 0.02, 0.3);
        assert_eq!(update_velocity(&aircraft, 300.0, 1.0), Err(ModelErrors::ZeroMass));
        assert_eq!(reference_velocity(&aircraft, 300.0, 1.0), Err(ModelErrors::ZeroMass));
    }

    #[test]
    fn zero_time_step_leaves_velocity_unchanged() {
        assert_eq!(update_velocity(&DemoJet, 300.0, 0.0), Ok(300.0));
    }

    #[test]
    fn velocity_step_has_no_hidden_state() {
        let first = update_velocity(&DemoJet, 512.0, 1.0);
        let second = update_velocity(&DemoJet, 512.0, 1.0);
        assert_eq!(first, second);
    }

    #[test]
    fn terminal_velocity_balances_thrust_and_drag() {
        let aircraft = stiff_aircraft();
        let v_t = terminal_velocity(&aircraft).unwrap();
        assert_abs_diff_eq!(v_t, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(update_velocity(&aircraft, v_t, 1.0).unwrap(), v_t, epsilon = 1e-9);
    }

    #[test]
    fn large_step_overshoots_terminal_velocity() {
        let aircraft = stiff_aircraft();
        let v = update_velocity(&aircraft, 9.0, 0.08).unwrap();
        assert_abs_diff_eq!(v, 10.52, epsilon = 1e-9);
        assert!(v > 10.0);

        // The overshoot then reverses, so the solution oscillates around terminal velocity.
        let next = update_velocity(&aircraft, v, 0.08).unwrap();
        assert!(next < 10.0);
    }

    #[test]
    fn small_step_approaches_terminal_velocity_monotonically() {
        let aircraft = stiff_aircraft();
        let mut v = 9.0;
        for _ in 0..1000 {
            let next = update_velocity(&aircraft, v, 0.001).unwrap();
            assert!(next >= v);
            assert!(next <= 10.0);
            v = next;
        }
        assert_abs_diff_eq!(v, 10.0, epsilon = 1e-6);
    }

    #[test]
    fn reference_integrator_is_more_accurate() {
        let aircraft = stiff_aircraft();
        let dt = 0.01;
        let (mut euler, mut rk4) = (0.0, 0.0);
        for _ in 0..20 {
            euler = update_velocity(&aircraft, euler, dt).unwrap();
            rk4 = reference_velocity(&aircraft, rk4, dt).unwrap();
        }
        let exact = exact_from_rest(0.2);
        let euler_error = (euler - exact).abs();
        let rk4_error = (rk4 - exact).abs();
        assert!(rk4_error < euler_error);
        assert!(rk4_error < 1e-3);
    }
}
