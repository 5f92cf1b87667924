//! Cartesian color spaces and the LAB → XYZ → sRGB pipeline (and back).
//!
//! Reference white is D65; the LAB nonlinearity uses the exact CIE ε/κ
//! constants and the sRGB transfer function follows IEC 61966-2-1.

use super::lch::{LchColor, normalize_hue};

/// D65 reference white, X component.
pub const WHITE_X: f64 = 0.950_47;
/// D65 reference white, Y component.
pub const WHITE_Y: f64 = 1.0;
/// D65 reference white, Z component.
pub const WHITE_Z: f64 = 1.088_83;

/// CIE ε: threshold between the cubic and linear LAB segments.
const EPSILON: f64 = 216.0 / 24389.0;
/// CIE κ: slope of the linear LAB segment.
const KAPPA: f64 = 24389.0 / 27.0;

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [ 3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266_0,  1.876_010_8,  0.041_556_0],
    [ 0.055_643_4, -0.204_025_9,  1.057_225_2],
];

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
];

/// Slack allowed by [`XyzColor::is_in_srgb_gamut`] for rounding noise.
const GAMUT_TOLERANCE: f64 = 1e-6;

#[inline]
fn apply(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Encode linear light into the sRGB transfer curve.
#[inline]
fn encode_srgb(linear: f64) -> f64 {
    if linear <= 0.003_130_8 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Decode an sRGB channel back into linear light.
#[inline]
fn decode_srgb(encoded: f64) -> f64 {
    if encoded <= 0.040_45 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// CIE LAB, cartesian companion of [`LchColor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabColor {
    /// Lightness in `[0, 100]`.
    pub l: f64,
    /// Green (negative) to red (positive) axis.
    pub a: f64,
    /// Blue (negative) to yellow (positive) axis.
    pub b: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl LabColor {
    /// Cartesian to polar. Achromatic input yields `c = 0, h = 0`.
    pub fn to_lch(self) -> LchColor {
        let c = self.a.hypot(self.b);
        let h = if c == 0.0 {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };
        LchColor {
            l: self.l,
            c,
            h,
            alpha: self.alpha,
        }
    }

    /// Undo the LAB nonlinearity against the D65 white.
    pub fn to_xyz(self) -> XyzColor {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        let cube_or_linear = |f: f64| {
            let cubed = f * f * f;
            if cubed > EPSILON {
                cubed
            } else {
                (116.0 * f - 16.0) / KAPPA
            }
        };
        let yr = if self.l > KAPPA * EPSILON {
            fy * fy * fy
        } else {
            self.l / KAPPA
        };

        XyzColor {
            x: cube_or_linear(fx) * WHITE_X,
            y: yr * WHITE_Y,
            z: cube_or_linear(fz) * WHITE_Z,
            alpha: self.alpha,
        }
    }
}

/// CIE 1931 XYZ tristimulus values, D65-relative with `Y = 1` for white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzColor {
    /// X tristimulus value.
    pub x: f64,
    /// Y tristimulus value (luminance).
    pub y: f64,
    /// Z tristimulus value.
    pub z: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl XyzColor {
    /// Linear-light sRGB channels, unclamped.
    pub fn to_linear_srgb(self) -> [f64; 3] {
        apply(&XYZ_TO_LINEAR_SRGB, [self.x, self.y, self.z])
    }

    /// Gamma-encoded sRGB. Out-of-gamut channels are clamped, not reported.
    pub fn to_rgb(self) -> RgbColor {
        let [r, g, b] = self.to_linear_srgb().map(|v| encode_srgb(v).clamp(0.0, 1.0));
        RgbColor {
            r,
            g,
            b,
            alpha: self.alpha,
        }
    }

    /// Whether every linear channel already sits inside `[0, 1]`.
    pub fn is_in_srgb_gamut(self) -> bool {
        self.to_linear_srgb()
            .iter()
            .all(|v| (-GAMUT_TOLERANCE..=1.0 + GAMUT_TOLERANCE).contains(v))
    }

    /// Apply the LAB nonlinearity against the D65 white.
    pub fn to_lab(self) -> LabColor {
        let f = |t: f64| {
            if t > EPSILON {
                t.cbrt()
            } else {
                (KAPPA * t + 16.0) / 116.0
            }
        };
        let fx = f(self.x / WHITE_X);
        let fy = f(self.y / WHITE_Y);
        let fz = f(self.z / WHITE_Z);

        LabColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
            alpha: self.alpha,
        }
    }
}

/// Gamma-encoded sRGB with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbColor {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl RgbColor {
    /// Opaque color from encoded channels.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    /// Decode and project back into XYZ.
    pub fn to_xyz(self) -> XyzColor {
        let linear = [self.r, self.g, self.b].map(decode_srgb);
        let [x, y, z] = apply(&LINEAR_SRGB_TO_XYZ, linear);
        XyzColor {
            x,
            y,
            z,
            alpha: self.alpha,
        }
    }

    /// Full inverse path back into LCH.
    pub fn to_lch(self) -> LchColor {
        self.to_xyz().to_lab().to_lch()
    }

    /// Quantize to 8 bits per channel.
    pub fn to_display_color(self) -> DisplayColor {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let quantize = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        DisplayColor {
            r: quantize(self.r),
            g: quantize(self.g),
            b: quantize(self.b),
            a: quantize(self.alpha),
        }
    }
}

/// 8-bit sRGB ready for a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl DisplayColor {
    /// `#RRGGBB`, alpha omitted.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
