pub mod color;
pub mod health;
pub mod ramp;
