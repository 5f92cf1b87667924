//! Specializes the anchor table for an arbitrary hue.

use crate::color::{mix, mix_angle, normalize_hue};

use super::definition::{RampDefinition, RampTable};

/// Curves for one requested hue, blended from the two anchors around it.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedRamp {
    /// The requested hue, normalized. Hue shifts are relative to it.
    pub base_hue: f64,
    /// Lightness per stop.
    pub lightness: Vec<f64>,
    /// Chroma per stop.
    pub chroma: Vec<f64>,
    /// Hue offset per stop.
    pub hue_shift: Vec<f64>,
    /// Anchor at or below the requested hue (circularly).
    pub lower_anchor: f64,
    /// Next anchor above the requested hue (circularly).
    pub upper_anchor: f64,
    /// Blend factor between the two anchors, `0` meaning exactly `lower_anchor`.
    pub weight: f64,
}

impl InterpolatedRamp {
    fn exact(anchor: &RampDefinition, hue: f64) -> Self {
        Self {
            base_hue: hue,
            lightness: anchor.lightness.clone(),
            chroma: anchor.chroma.clone(),
            hue_shift: anchor.hue_shift.clone(),
            lower_anchor: anchor.base_hue,
            upper_anchor: anchor.base_hue,
            weight: 0.0,
        }
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.lightness.len()
    }

    /// Whether there are no stops.
    pub fn is_empty(&self) -> bool {
        self.lightness.is_empty()
    }
}

/// Blend the two anchors bracketing `hue`.
///
/// The bracketing pair is the last anchor whose hue is `<=` the request and the
/// one after it, wrapping from the highest anchor back to the lowest. A hue
/// sitting exactly halfway therefore always blends from the lower anchor with
/// weight `0.5`, and a hue sitting on an anchor returns that anchor's curves
/// untouched.
pub fn interpolate_ramp(table: &RampTable, hue: f64) -> InterpolatedRamp {
    let hue = normalize_hue(hue);
    let anchors = table.anchors();
    let count = anchors.len();

    let above = anchors.partition_point(|anchor| anchor.base_hue <= hue);
    let lower_index = if above == 0 { count - 1 } else { above - 1 };
    let upper_index = (lower_index + 1) % count;
    let lower = &anchors[lower_index];
    let upper = &anchors[upper_index];

    let distance = (hue - lower.base_hue).rem_euclid(360.0);
    if distance == 0.0 || lower_index == upper_index {
        return InterpolatedRamp::exact(lower, hue);
    }
    let span = (upper.base_hue - lower.base_hue).rem_euclid(360.0);
    let t = distance / span;

    let blend = |a: &[f64], b: &[f64], f: fn(f64, f64, f64) -> f64| -> Vec<f64> {
        a.iter().zip(b).map(|(&x, &y)| f(x, y, t)).collect()
    };

    InterpolatedRamp {
        base_hue: hue,
        lightness: blend(&lower.lightness, &upper.lightness, mix),
        chroma: blend(&lower.chroma, &upper.chroma, mix),
        hue_shift: blend(&lower.hue_shift, &upper.hue_shift, mix_angle),
        lower_anchor: lower.base_hue,
        upper_anchor: upper.base_hue,
        weight: t,
    }
}
