use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    dto::color::ColorSnapshot,
    ramp::{InterpolatedRamp, Ramp, RampStop},
};

/// Upper bound accepted for the `steps` query parameter.
pub const MAX_STEPS: usize = 64;

/// Query for a generated ramp.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct RampQuery {
    /// Hue in degrees; any finite value, normalized server-side.
    pub hue: f64,
    /// Number of stops; defaults to the table's stop count.
    #[serde(default)]
    #[validate(range(min = 1, max = MAX_STEPS))]
    pub steps: Option<usize>,
    /// Force chroma to zero.
    #[serde(default)]
    pub grayscale: bool,
}

/// Query for the representative color of a hue.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PrimaryQuery {
    /// Hue in degrees.
    pub hue: f64,
    /// Force chroma to zero.
    #[serde(default)]
    pub grayscale: bool,
}

/// Query for the interpolated curves of a hue.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DefinitionQuery {
    /// Hue in degrees.
    pub hue: f64,
}

/// One stop of a generated ramp.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct StopSnapshot {
    pub index: usize,
    /// Design-token label; absent when the ramp was resampled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<u32>,
    pub color: ColorSnapshot,
}

impl From<RampStop> for StopSnapshot {
    fn from(stop: RampStop) -> Self {
        Self {
            index: stop.index,
            token: stop.token,
            color: stop.color.into(),
        }
    }
}

/// Generated ramp, lightest stop first.
#[derive(Debug, Serialize, ToSchema)]
pub struct RampResponse {
    pub hue: f64,
    pub grayscale: bool,
    pub steps: usize,
    pub stops: Vec<StopSnapshot>,
}

impl From<&Ramp> for RampResponse {
    fn from(ramp: &Ramp) -> Self {
        Self {
            hue: ramp.hue(),
            grayscale: ramp.is_grayscale(),
            steps: ramp.len(),
            stops: ramp.stops().map(StopSnapshot::from).collect(),
        }
    }
}

/// Lightness, chroma and hue-shift curves blended for a hue.
#[derive(Debug, Serialize, ToSchema)]
pub struct DefinitionResponse {
    pub base_hue: f64,
    pub lower_anchor: f64,
    pub upper_anchor: f64,
    /// Blend factor between the anchors; 0 means an exact anchor hit.
    pub weight: f64,
    pub stops: Vec<u32>,
    pub lightness: Vec<f64>,
    pub chroma: Vec<f64>,
    pub hue_shift: Vec<f64>,
}

impl DefinitionResponse {
    /// Pair interpolated curves with the stop labels of the table they came from.
    pub fn new(curves: InterpolatedRamp, stops: &[u32]) -> Self {
        Self {
            base_hue: curves.base_hue,
            lower_anchor: curves.lower_anchor,
            upper_anchor: curves.upper_anchor,
            weight: curves.weight,
            stops: stops.to_vec(),
            lightness: curves.lightness,
            chroma: curves.chroma,
            hue_shift: curves.hue_shift,
        }
    }
}

/// A named family and its primary color.
#[derive(Debug, Serialize, ToSchema)]
pub struct FamilySummary {
    pub name: String,
    pub hue: f64,
    pub grayscale: bool,
    pub primary: ColorSnapshot,
}

/// Every named family, gray first then by hue.
#[derive(Debug, Serialize, ToSchema)]
pub struct FamiliesResponse {
    pub families: Vec<FamilySummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(steps: Option<usize>) -> RampQuery {
        RampQuery {
            hue: 0.0,
            steps,
            grayscale: false,
        }
    }

    #[test]
    fn steps_are_bounded_by_max_steps() {
        assert!(query(None).validate().is_ok());
        assert!(query(Some(1)).validate().is_ok());
        assert!(query(Some(MAX_STEPS)).validate().is_ok());
        assert!(query(Some(0)).validate().is_err());
        assert!(query(Some(MAX_STEPS + 1)).validate().is_err());
    }
}
