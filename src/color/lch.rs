//! Cylindrical LCH colors, hue arithmetic and interpolation.

use std::fmt;

use super::convert::{DisplayColor, LabColor, RgbColor, XyzColor};

/// Full turn of the hue circle, in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Wrap a hue into `[0, 360)`.
///
/// Values that land on 360 after rounding (tiny negative inputs) fold back to 0,
/// and negative zero comes out as positive zero.
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(FULL_TURN);
    if wrapped == 0.0 || wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Shortest signed angular delta from `from` to `to`, in `(-180, 180]`.
#[inline]
pub fn hue_delta(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(FULL_TURN);
    if delta > FULL_TURN / 2.0 {
        delta - FULL_TURN
    } else {
        delta
    }
}

/// Linear mix of two scalars; `t = 0` and `t = 1` reproduce the endpoints exactly.
#[inline]
pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Walk from `from` towards `to` along the shortest arc.
///
/// The result is not wrapped, so negative offsets stay negative. Each half of
/// the range is anchored on its nearest endpoint so both ends are exact.
#[inline]
pub fn mix_angle(from: f64, to: f64, t: f64) -> f64 {
    let delta = hue_delta(from, to);
    if t < 0.5 {
        from + delta * t
    } else {
        to - delta * (1.0 - t)
    }
}

/// A color in CIE LCH(ab): lightness, chroma and hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LchColor {
    /// Lightness in `[0, 100]`.
    pub l: f64,
    /// Chroma, `>= 0`, practically below ~130.
    pub c: f64,
    /// Hue angle in degrees, `[0, 360)`.
    pub h: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl Default for LchColor {
    fn default() -> Self {
        Self {
            l: 0.0,
            c: 0.0,
            h: 0.0,
            alpha: 1.0,
        }
    }
}

impl LchColor {
    /// Opaque color with a normalized hue.
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self::with_alpha(l, c, h, 1.0)
    }

    /// Color with an explicit alpha, clamped to `[0, 1]`.
    pub fn with_alpha(l: f64, c: f64, h: f64, alpha: f64) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Polar to cartesian: `a = c·cos(h)`, `b = c·sin(h)`.
    pub fn to_lab(self) -> LabColor {
        let rad = self.h.to_radians();
        LabColor {
            l: self.l,
            a: rad.cos() * self.c,
            b: rad.sin() * self.c,
            alpha: self.alpha,
        }
    }

    /// Convert through LAB into CIE XYZ (D65).
    pub fn to_xyz(self) -> XyzColor {
        self.to_lab().to_xyz()
    }

    /// Convert into gamma-encoded sRGB, clamped to `[0, 1]`.
    pub fn to_rgb(self) -> RgbColor {
        self.to_xyz().to_rgb()
    }

    /// The 8-bit representation handed to renderers.
    ///
    /// Only call this at the display boundary: ramp math stays in LCH.
    pub fn to_display_color(self) -> DisplayColor {
        self.to_rgb().to_display_color()
    }

    /// Whether the color fits inside sRGB without clamping.
    pub fn is_in_srgb_gamut(self) -> bool {
        self.to_xyz().is_in_srgb_gamut()
    }

    /// Interpolate towards `other`.
    ///
    /// Lightness, chroma and alpha mix linearly; hue takes the shortest arc and
    /// is normalized afterwards. `t` is not clamped.
    #[must_use]
    pub fn lerp(self, other: LchColor, t: f64) -> LchColor {
        LchColor {
            l: mix(self.l, other.l, t),
            c: mix(self.c, other.c, t),
            h: normalize_hue(mix_angle(self.h, other.h, t)),
            alpha: mix(self.alpha, other.alpha, t),
        }
    }

    /// Apply per-channel overrides, keeping every channel left as `None`.
    #[must_use]
    pub fn adjusted(self, adjustment: &Adjustment) -> LchColor {
        LchColor::with_alpha(
            adjustment.l.unwrap_or(self.l),
            adjustment.c.unwrap_or(self.c),
            adjustment.h.unwrap_or(self.h),
            adjustment.alpha.unwrap_or(self.alpha),
        )
    }

    /// Shorthand for `adjusted(..).to_display_color()`.
    pub fn adjusted_display(self, adjustment: &Adjustment) -> DisplayColor {
        self.adjusted(adjustment).to_display_color()
    }
}

/// Optional per-channel overrides for [`LchColor::adjusted`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Adjustment {
    /// Replacement lightness.
    pub l: Option<f64>,
    /// Replacement chroma.
    pub c: Option<f64>,
    /// Replacement hue, in degrees.
    pub h: Option<f64>,
    /// Replacement alpha.
    pub alpha: Option<f64>,
}

impl fmt::Display for LchColor {
    /// CSS Color 4 notation, readable back by the literal parser.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lch({}% {} {}", self.l, self.c, self.h)?;
        if self.alpha < 1.0 {
            write!(f, " / {}", self.alpha)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPS, "{a} != {b}");
    }

    #[test]
    fn normalize_hue_wraps_both_directions() {
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-10.0), 350.0);
        assert_eq!(normalize_hue(720.0), 0.0);
        assert_eq!(normalize_hue(292.5), 292.5);
        assert!(normalize_hue(-1e-20) < FULL_TURN);
    }

    #[test]
    fn negative_zero_hue_is_positive_zero() {
        assert!(normalize_hue(-0.0).is_sign_positive());
        assert!(normalize_hue(-360.0).is_sign_positive());
        let color = LchColor::new(50.0, 0.0, -0.0);
        assert!(color.h.is_sign_positive());
        assert_eq!(color.to_string(), "lch(50% 0 0)");
    }

    #[test]
    fn hue_delta_takes_shortest_path() {
        assert_eq!(hue_delta(350.0, 10.0), 20.0);
        assert_eq!(hue_delta(10.0, 350.0), -20.0);
        assert_eq!(hue_delta(0.0, 180.0), 180.0);
        assert_eq!(hue_delta(180.0, 0.0), 180.0);
        assert_eq!(hue_delta(-6.0, 4.0), 10.0);
    }

    #[test]
    fn lab_round_trip_recovers_lch() {
        for &(l, c, h) in &[
            (50.0, 40.0, 0.0),
            (70.0, 37.0, 209.0),
            (12.5, 90.0, 359.5),
            (99.0, 3.0, 120.25),
            (30.0, 130.0, 292.5),
        ] {
            let lch = LchColor::new(l, c, h);
            let back = lch.to_lab().to_lch();
            assert_close(back.l, l);
            assert_close(back.c, c);
            assert!(hue_delta(back.h, h).abs() < EPS, "hue {h} came back as {}", back.h);
        }
    }

    #[test]
    fn achromatic_colors_do_not_produce_nan() {
        for h in [0.0, 90.0, 271.0] {
            let lab = LchColor::new(55.0, 0.0, h).to_lab();
            assert_eq!(lab.a.abs(), 0.0);
            assert_eq!(lab.b.abs(), 0.0);
            let back = lab.to_lch();
            assert_eq!(back.c, 0.0);
            assert!(back.h.is_finite());
        }
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = LchColor::with_alpha(12.3, 45.6, 350.7, 0.4);
        let b = LchColor::with_alpha(88.1, 3.3, 12.9, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(b.lerp(a, 0.0), b);
        assert_eq!(b.lerp(a, 1.0), a);
    }

    #[test]
    fn lerp_wraps_hue_through_zero() {
        let a = LchColor::new(50.0, 30.0, 350.0);
        let b = LchColor::new(50.0, 30.0, 10.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.h, 0.0);
        let quarter = a.lerp(b, 0.25);
        assert_close(quarter.h, 355.0);
    }

    #[test]
    fn lerp_mixes_scalars_linearly() {
        let a = LchColor::with_alpha(20.0, 10.0, 100.0, 0.0);
        let b = LchColor::with_alpha(60.0, 50.0, 140.0, 1.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.l, 40.0);
        assert_eq!(mid.c, 30.0);
        assert_eq!(mid.h, 120.0);
        assert_eq!(mid.alpha, 0.5);
    }

    #[test]
    fn adjustment_keeps_unset_channels() {
        let base = LchColor::with_alpha(40.0, 25.0, 200.0, 0.8);
        let adjusted = base.adjusted(&Adjustment {
            l: Some(90.0),
            ..Adjustment::default()
        });
        assert_eq!(adjusted, LchColor::with_alpha(90.0, 25.0, 200.0, 0.8));
        assert_eq!(base.adjusted(&Adjustment::default()), base);

        let rotated = base.adjusted(&Adjustment {
            h: Some(-30.0),
            alpha: Some(2.0),
            ..Adjustment::default()
        });
        assert_eq!(rotated.h, 330.0);
        assert_eq!(rotated.alpha, 1.0);
    }

    #[test]
    fn adjusted_display_quantizes_the_adjusted_color() {
        let base = LchColor::new(40.0, 25.0, 200.0);
        let adjustment = Adjustment {
            l: Some(85.0),
            c: Some(10.0),
            ..Adjustment::default()
        };
        let display = base.adjusted_display(&adjustment);
        assert_eq!(display, base.adjusted(&adjustment).to_display_color());
        assert_ne!(display, base.to_display_color());
    }

    #[test]
    fn display_uses_css_notation() {
        assert_eq!(LchColor::new(70.0, 37.0, 209.0).to_string(), "lch(70% 37 209)");
        assert_eq!(
            LchColor::with_alpha(50.5, 10.0, 0.0, 0.5).to_string(),
            "lch(50.5% 10 0 / 0.5)"
        );
    }
}
