use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::color::LchColor;

/// 8-bit sRGB channels of a color.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct RgbSnapshot {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color as seen by clients: LCH channels plus ready-to-render forms.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct ColorSnapshot {
    pub l: f64,
    pub c: f64,
    pub h: f64,
    pub alpha: f64,
    /// CSS `lch()` notation.
    pub css: String,
    /// `#RRGGBB`, clamped into sRGB.
    pub hex: String,
    pub rgb: RgbSnapshot,
}

impl From<LchColor> for ColorSnapshot {
    fn from(color: LchColor) -> Self {
        let display = color.to_display_color();
        Self {
            l: color.l,
            c: color.c,
            h: color.h,
            alpha: color.alpha,
            css: color.to_string(),
            hex: display.to_hex(),
            rgb: RgbSnapshot {
                r: display.r,
                g: display.g,
                b: display.b,
            },
        }
    }
}

fn opaque() -> f64 {
    1.0
}

/// LCH channels supplied by a client.
#[derive(Debug, Deserialize, ToSchema, Validate, Clone, Copy)]
pub struct LchInput {
    #[validate(range(min = 0.0, max = 100.0))]
    pub l: f64,
    #[validate(range(min = 0.0))]
    pub c: f64,
    pub h: f64,
    /// Defaults to 1 when omitted.
    #[serde(default = "opaque")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub alpha: f64,
}

impl From<LchInput> for LchColor {
    fn from(input: LchInput) -> Self {
        LchColor::with_alpha(input.l, input.c, input.h, input.alpha)
    }
}

/// Payload for interpolating between two colors.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LerpRequest {
    #[validate(nested)]
    pub from: LchInput,
    #[validate(nested)]
    pub to: LchInput,
    /// Interpolation factor in `[0, 1]`.
    #[validate(range(min = 0.0, max = 1.0))]
    pub t: f64,
}

/// Query carrying a textual color literal such as `lch(70% 30 210)`.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct ParseQuery {
    /// Literal to parse.
    #[validate(length(min = 1, max = 128))]
    pub value: String,
}

/// Query selecting one stop of the ramp a color belongs to.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct StopQuery {
    /// Color literal whose hue (and grayness) selects the ramp.
    #[validate(length(min = 1, max = 128))]
    pub value: String,
    /// Stop index; saturates at both ends of the ramp.
    pub index: isize,
}
