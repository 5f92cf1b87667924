//! Public ramp API: concrete, ordered color stops for a hue.

use std::sync::Arc;

use tracing::warn;

use crate::color::{LchColor, mix, mix_angle, normalize_hue, parse_lch};

use super::definition::{RampTable, builtin};
use super::interpolator::{InterpolatedRamp, interpolate_ramp};

/// How many stops below the midpoint the primary color sits.
pub const PRIMARY_STOP_OFFSET: usize = 2;
/// Chroma assigned to every stop of a grayscale ramp.
pub const GRAYSCALE_CHROMA: f64 = 0.0;
/// Colors at or below this chroma are treated as grays when deriving their ramp.
pub const GRAYSCALE_THRESHOLD: f64 = 0.1;
/// Lightness of the fallback literal used when ramp data is empty.
pub const FALLBACK_LIGHTNESS: f64 = 70.0;
/// Chroma of the fallback literal used when ramp data is empty.
pub const FALLBACK_CHROMA: f64 = 30.0;

/// Last resort when even the fallback literal cannot be built (non-finite hue).
const DEFAULT_COLOR: LchColor = LchColor {
    l: FALLBACK_LIGHTNESS,
    c: 0.0,
    h: 0.0,
    alpha: 1.0,
};

/// Index of the representative stop for a ramp of `steps` stops.
///
/// Sits [`PRIMARY_STOP_OFFSET`] below `steps / 2`, saturating at the first stop.
pub fn primary_index(steps: usize) -> usize {
    (steps / 2)
        .saturating_sub(PRIMARY_STOP_OFFSET)
        .min(steps.saturating_sub(1))
}

/// Color used when a ramp unexpectedly holds no stops: `lch(70% 30 <hue>)`.
pub fn fallback_color(hue: f64) -> LchColor {
    let literal = format!("lch({FALLBACK_LIGHTNESS}% {FALLBACK_CHROMA} {hue})");
    match parse_lch(&literal) {
        Ok(color) => color,
        Err(err) => {
            warn!(error = %err, "fallback literal rejected; using default color");
            DEFAULT_COLOR
        }
    }
}

/// One position of a generated ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampStop {
    /// Position in the ramp, lightest first.
    pub index: usize,
    /// Design-token label, when the ramp is aligned with the table's stops.
    pub token: Option<u32>,
    /// The stop's color.
    pub color: LchColor,
}

/// An ordered sequence of colors generated for one hue.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    hue: f64,
    grayscale: bool,
    colors: Vec<LchColor>,
    tokens: Vec<u32>,
}

impl Ramp {
    /// Wrap externally supplied colors; no token labels are attached.
    pub fn from_colors(hue: f64, colors: Vec<LchColor>) -> Self {
        Self {
            hue: normalize_hue(hue),
            grayscale: false,
            colors,
            tokens: Vec::new(),
        }
    }

    /// Hue the ramp was generated for.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Whether chroma was forced to zero.
    pub fn is_grayscale(&self) -> bool {
        self.grayscale
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether there are no stops.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors, in stop order.
    pub fn colors(&self) -> &[LchColor] {
        &self.colors
    }

    /// Take the colors out.
    pub fn into_colors(self) -> Vec<LchColor> {
        self.colors
    }

    /// Token label of the stop at `index`, if labels are attached.
    pub fn token(&self, index: usize) -> Option<u32> {
        self.tokens.get(index).copied()
    }

    /// Stop at `index`, saturating at both ends.
    ///
    /// Negative indices return the first stop and indices past the end return the
    /// last one. An empty ramp yields [`fallback_color`] for its hue.
    pub fn get(&self, index: isize) -> LchColor {
        let Some(last) = self.colors.len().checked_sub(1) else {
            return fallback_color(self.hue);
        };
        let index = usize::try_from(index).unwrap_or(0).min(last);
        self.colors[index]
    }

    /// The representative stop, see [`primary_index`].
    pub fn primary(&self) -> LchColor {
        self.at(primary_index(self.len()))
    }

    /// The stop at `len / 2`.
    pub fn midpoint(&self) -> LchColor {
        self.at(self.len() / 2)
    }

    /// Stops with their positions and labels.
    pub fn stops(&self) -> impl Iterator<Item = RampStop> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(index, &color)| RampStop {
                index,
                token: self.token(index),
                color,
            })
    }

    fn at(&self, index: usize) -> LchColor {
        self.get(isize::try_from(index).unwrap_or(isize::MAX))
    }
}

/// Generates ramps from a shared, read-only [`RampTable`].
#[derive(Debug, Clone)]
pub struct RampGenerator {
    table: Arc<RampTable>,
}

impl Default for RampGenerator {
    fn default() -> Self {
        Self::new(builtin())
    }
}

impl RampGenerator {
    /// Generator over a specific table.
    pub fn new(table: Arc<RampTable>) -> Self {
        Self { table }
    }

    /// The table backing this generator.
    pub fn table(&self) -> &RampTable {
        &self.table
    }

    /// Stop count used when callers do not ask for one.
    pub fn default_steps(&self) -> usize {
        self.table.step_count()
    }

    /// Curves for `hue`, blended from the nearest anchors.
    pub fn interpolate(&self, hue: f64) -> InterpolatedRamp {
        interpolate_ramp(&self.table, hue)
    }

    /// The chromatic ramp for `hue` at the default stop count.
    pub fn generate_ramp(&self, hue: f64) -> Vec<LchColor> {
        self.color_ramp(hue, self.default_steps(), false)
            .into_colors()
    }

    /// Build a ramp of `steps` stops for `hue`.
    ///
    /// With `steps` equal to the table's stop count the interpolated curves are
    /// used as-is; any other count resamples them piecewise-linearly along the
    /// stop axis. `steps == 0` is treated as 1. Grayscale ramps keep the
    /// lightness curve and drop chroma to [`GRAYSCALE_CHROMA`].
    pub fn color_ramp(&self, hue: f64, steps: usize, grayscale: bool) -> Ramp {
        let curves = self.interpolate(hue);
        let steps = steps.max(1);
        let aligned = steps == curves.len();

        let colors = (0..steps)
            .map(|i| {
                let (l, c, shift) = if aligned {
                    (curves.lightness[i], curves.chroma[i], curves.hue_shift[i])
                } else {
                    sample(&curves, sample_position(i, steps, curves.len()))
                };
                let c = if grayscale { GRAYSCALE_CHROMA } else { c };
                LchColor::new(l, c, curves.base_hue + shift)
            })
            .collect();

        Ramp {
            hue: curves.base_hue,
            grayscale,
            colors,
            tokens: if aligned {
                self.table.stops().to_vec()
            } else {
                Vec::new()
            },
        }
    }

    /// The representative color of the default-length ramp for `hue`.
    pub fn primary_color(&self, hue: f64, grayscale: bool) -> LchColor {
        self.color_ramp(hue, self.default_steps(), grayscale)
            .primary()
    }

    /// The default-length ramp an existing color belongs to.
    ///
    /// Colors with chroma at or below [`GRAYSCALE_THRESHOLD`] get a grayscale ramp.
    pub fn all_stops(&self, color: LchColor) -> Ramp {
        self.color_ramp(
            color.h,
            self.default_steps(),
            color.c <= GRAYSCALE_THRESHOLD,
        )
    }

    /// Stop `index` of [`Self::all_stops`], clamped into range.
    pub fn color_at(&self, color: LchColor, index: isize) -> LchColor {
        self.all_stops(color).get(index)
    }
}

/// Position on the stop axis for output stop `i` of `steps`.
fn sample_position(i: usize, steps: usize, len: usize) -> f64 {
    let last = len.saturating_sub(1) as f64;
    if steps <= 1 {
        last / 2.0
    } else {
        i as f64 * last / (steps - 1) as f64
    }
}

fn sample(curves: &InterpolatedRamp, position: f64) -> (f64, f64, f64) {
    let last = curves.len() - 1;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lo = (position.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    let t = position - lo as f64;
    (
        mix(curves.lightness[lo], curves.lightness[hi], t),
        mix(curves.chroma[lo], curves.chroma[hi], t),
        mix_angle(curves.hue_shift[lo], curves.hue_shift[hi], t),
    )
}

impl LchColor {
    /// The built-in ramp this color's hue belongs to.
    pub fn all_stops(self) -> Ramp {
        RampGenerator::default().all_stops(self)
    }

    /// Stop `index` of this color's built-in ramp; out-of-range indices saturate.
    pub fn ramp_color(self, index: isize) -> LchColor {
        RampGenerator::default().color_at(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp::definition::{RampDefinition, STEP_COUNT, STOP_TOKENS};

    #[test]
    fn primary_color_for_blue_matches_reference_stop() {
        let generator = RampGenerator::default();
        let primary = generator.primary_color(210.0, false);
        // blue anchor, stop 300 (index 4): l 70, c 37, shift -1
        assert_eq!(primary, LchColor::new(70.0, 37.0, 209.0));
        assert_eq!(primary_index(STEP_COUNT), 4);
    }

    #[test]
    fn primary_index_saturates_for_short_ramps() {
        assert_eq!(primary_index(0), 0);
        assert_eq!(primary_index(1), 0);
        assert_eq!(primary_index(4), 0);
        assert_eq!(primary_index(5), 0);
        assert_eq!(primary_index(6), 1);
        assert_eq!(primary_index(11), 3);
    }

    #[test]
    fn aligned_ramp_follows_anchor_and_labels_stops() {
        let generator = RampGenerator::default();
        let ramp = generator.color_ramp(35.0, STEP_COUNT, false);
        let orange = generator.table().anchor_at(35.0).unwrap();

        assert_eq!(ramp.len(), STEP_COUNT);
        for stop in ramp.stops() {
            let i = stop.index;
            assert_eq!(stop.token, Some(STOP_TOKENS[i]));
            assert_eq!(stop.color.l, orange.lightness[i]);
            assert_eq!(stop.color.c, orange.chroma[i]);
            assert_eq!(stop.color.h, normalize_hue(35.0 + orange.hue_shift[i]));
        }
    }

    #[test]
    fn negative_hue_shift_wraps_below_zero() {
        let generator = RampGenerator::default();
        let pink = generator.generate_ramp(0.0);
        assert_eq!(pink[0].h, 356.0);
        assert_eq!(pink[11].h, 5.0);
    }

    #[test]
    fn grayscale_keeps_lightness_and_drops_chroma() {
        let generator = RampGenerator::default();
        for hue in [0.0, 42.0, 85.0, 210.0, 347.5] {
            for steps in [1, 5, STEP_COUNT, 20] {
                let colored = generator.color_ramp(hue, steps, false);
                let gray = generator.color_ramp(hue, steps, true);
                assert!(gray.is_grayscale());
                assert_eq!(gray.len(), colored.len());
                for (g, c) in gray.colors().iter().zip(colored.colors()) {
                    assert_eq!(g.c, 0.0);
                    assert_eq!(g.l, c.l);
                }
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = RampGenerator::default();
        let first = generator.color_ramp(200.0, 11, false);
        let _other = generator.color_ramp(15.0, 7, true);
        let second = RampGenerator::default().color_ramp(200.0, 11, false);
        assert_eq!(first, second);
        for (a, b) in first.colors().iter().zip(second.colors()) {
            assert_eq!(a.l.to_bits(), b.l.to_bits());
            assert_eq!(a.c.to_bits(), b.c.to_bits());
            assert_eq!(a.h.to_bits(), b.h.to_bits());
        }
    }

    #[test]
    fn resampled_ramp_keeps_endpoints_and_order() {
        let generator = RampGenerator::default();
        let full = generator.color_ramp(140.0, STEP_COUNT, false);
        let short = generator.color_ramp(140.0, 5, false);
        assert_eq!(short.len(), 5);
        assert_eq!(short.token(0), None);
        assert_eq!(short.colors()[0], full.colors()[0]);
        assert_eq!(short.colors()[4], full.colors()[STEP_COUNT - 1]);
        assert!(short.colors().windows(2).all(|w| w[0].l > w[1].l));

        let long = generator.color_ramp(140.0, 23, false);
        assert_eq!(long.colors()[0], full.colors()[0]);
        assert_eq!(long.colors()[2], full.colors()[1]);
        assert_eq!(long.colors()[22], full.colors()[STEP_COUNT - 1]);
    }

    #[test]
    fn zero_or_one_step_yields_the_curve_midpoint() {
        let generator = RampGenerator::default();
        let blue = generator.table().anchor_at(210.0).unwrap().clone();
        for steps in [0, 1] {
            let ramp = generator.color_ramp(210.0, steps, false);
            assert_eq!(ramp.len(), 1);
            let only = ramp.colors()[0];
            assert_eq!(only.l, mix(blue.lightness[5], blue.lightness[6], 0.5));
            assert_eq!(only.c, mix(blue.chroma[5], blue.chroma[6], 0.5));
        }
    }

    #[test]
    fn get_clamps_both_ends() {
        let ramp = RampGenerator::default().color_ramp(120.0, STEP_COUNT, false);
        let last = ramp.colors()[STEP_COUNT - 1];
        assert_eq!(ramp.get(11), last);
        assert_eq!(ramp.get(12), last);
        assert_eq!(ramp.get(isize::MAX), last);
        assert_eq!(ramp.get(-1), ramp.colors()[0]);
        assert_eq!(ramp.get(isize::MIN), ramp.colors()[0]);
    }

    #[test]
    fn instance_bound_lookup_uses_color_hue_and_clamps() {
        let color = LchColor::new(55.0, 40.0, 210.0);
        let ramp = color.all_stops();
        assert!(!ramp.is_grayscale());
        assert_eq!(color.ramp_color(3), ramp.colors()[3]);
        assert_eq!(color.ramp_color(99), ramp.colors()[STEP_COUNT - 1]);
        assert_eq!(color.ramp_color(-4), ramp.colors()[0]);

        let gray = LchColor::new(55.0, 0.05, 210.0);
        assert!(gray.all_stops().is_grayscale());
        assert_eq!(gray.ramp_color(5).c, 0.0);
    }

    #[test]
    fn midpoint_is_the_stop_at_half_length() {
        let generator = RampGenerator::default();
        let ramp = generator.color_ramp(210.0, STEP_COUNT, false);
        assert_eq!(ramp.midpoint(), ramp.colors()[STEP_COUNT / 2]);
        let blue = generator.table().anchor_at(210.0).unwrap();
        assert_eq!(Some(ramp.midpoint()), blue.mid_color());

        let odd = generator.color_ramp(30.0, 5, false);
        assert_eq!(odd.midpoint(), odd.colors()[2]);
    }

    #[test]
    fn empty_ramp_falls_back_to_literal_color() {
        let empty = Ramp::from_colors(120.0, Vec::new());
        assert_eq!(empty.get(0), LchColor::new(70.0, 30.0, 120.0));
        assert_eq!(empty.primary(), LchColor::new(70.0, 30.0, 120.0));
        assert_eq!(empty.midpoint(), LchColor::new(70.0, 30.0, 120.0));
        assert_eq!(fallback_color(f64::NAN), DEFAULT_COLOR);
    }

    #[test]
    fn custom_tables_drive_the_default_step_count() {
        let table = RampTable::new(
            vec![1, 2, 3],
            vec![RampDefinition {
                base_hue: 0.0,
                lightness: vec![90.0, 50.0, 10.0],
                chroma: vec![10.0, 20.0, 30.0],
                hue_shift: vec![0.0, 0.0, 0.0],
            }],
        )
        .unwrap();
        let generator = RampGenerator::new(Arc::new(table));
        assert_eq!(generator.default_steps(), 3);
        assert_eq!(generator.primary_color(40.0, false), LchColor::new(90.0, 10.0, 40.0));
        assert_eq!(generator.generate_ramp(40.0).len(), 3);
    }
}
