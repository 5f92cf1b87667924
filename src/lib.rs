//! Library crate for color-tokens: perceptually uniform LCH color ramps and the
//! HTTP service that exposes them.

pub mod color;
pub mod config;
mod dto;
mod error;
pub mod ramp;
pub mod routes;
pub mod services;
pub mod state;

pub use color::{LchColor, parse_lch};
pub use ramp::{HueFamily, Ramp, RampGenerator};
