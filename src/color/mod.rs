//! Color representations and the conversions between them.

pub mod convert;
pub mod lch;
pub mod parse;

pub use convert::{DisplayColor, LabColor, RgbColor, XyzColor};
pub use lch::{Adjustment, LchColor, hue_delta, mix, mix_angle, normalize_hue};
pub use parse::{ColorParseError, ParseErrorKind, parse_lch};
