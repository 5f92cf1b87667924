//! Ramp definitions, per-hue interpolation and stop generation.

pub mod definition;
pub mod family;
pub mod generator;
pub mod interpolator;

pub use definition::{
    DefinitionError, RampDefinition, RampTable, STEP_COUNT, STOP_TOKENS, builtin,
};
pub use family::HueFamily;
pub use generator::{
    GRAYSCALE_CHROMA, GRAYSCALE_THRESHOLD, PRIMARY_STOP_OFFSET, Ramp, RampGenerator, RampStop,
    fallback_color, primary_index,
};
pub use interpolator::{InterpolatedRamp, interpolate_ramp};
