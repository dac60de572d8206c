use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlightPhase {
    Climb,
    Turn,
    Cruise,
}

impl FlightPhase {
    pub fn is_turning(&self) -> bool {
        matches!(self, FlightPhase::Turn)
    }

    pub fn is_climbing(&self) -> bool {
        matches!(self, FlightPhase::Climb)
    }
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlightPhase::Climb => write!(f, "Climb"),
            FlightPhase::Turn => write!(f, "Turn"),
            FlightPhase::Cruise => write!(f, "Cruise"),
        }
    }
}
