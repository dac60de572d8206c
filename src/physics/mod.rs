pub mod drag;
pub mod dynamics;
pub mod energy;
pub mod turning;
