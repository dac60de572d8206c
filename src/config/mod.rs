pub mod aircraft;
pub mod simulation;
