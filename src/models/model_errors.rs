use thiserror::Error;

/// Precondition failures of the aircraft formulas.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ModelErrors {
    #[error("aircraft mass must be nonzero to compute acceleration")]
    ZeroMass,

    #[error("velocity must be nonzero while turning")]
    ZeroTurnVelocity,
}
