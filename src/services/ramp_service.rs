use tracing::{debug, info};

use crate::{
    dto::color::ColorSnapshot,
    dto::ramp::{
        DefinitionQuery, DefinitionResponse, FamiliesResponse, FamilySummary, MAX_STEPS,
        PrimaryQuery, RampQuery, RampResponse,
    },
    error::ServiceError,
    ramp::HueFamily,
    services::ensure_finite_hue,
    state::SharedState,
};

/// Generate a ramp for the requested hue and stop count.
pub fn ramp(state: &SharedState, query: &RampQuery) -> Result<RampResponse, ServiceError> {
    let hue = ensure_finite_hue(query.hue)?;
    let generator = state.generator();
    let steps = query.steps.unwrap_or_else(|| generator.default_steps());
    if steps == 0 || steps > MAX_STEPS {
        return Err(ServiceError::InvalidInput(format!(
            "steps must be between 1 and {MAX_STEPS}, got {steps}"
        )));
    }

    let ramp = generator.color_ramp(hue, steps, query.grayscale);
    debug!(hue = ramp.hue(), steps, grayscale = query.grayscale, "generated ramp");
    Ok(RampResponse::from(&ramp))
}

/// Representative color of the default ramp for a hue.
pub fn primary(state: &SharedState, query: &PrimaryQuery) -> Result<ColorSnapshot, ServiceError> {
    let hue = ensure_finite_hue(query.hue)?;
    let color = state.generator().primary_color(hue, query.grayscale);
    debug!(hue, %color, "resolved primary color");
    Ok(color.into())
}

/// Blended curves for a hue, including which anchors contributed.
pub fn definition(
    state: &SharedState,
    query: &DefinitionQuery,
) -> Result<DefinitionResponse, ServiceError> {
    let hue = ensure_finite_hue(query.hue)?;
    let generator = state.generator();
    let curves = generator.interpolate(hue);
    debug!(
        hue = curves.base_hue,
        lower = curves.lower_anchor,
        upper = curves.upper_anchor,
        weight = curves.weight,
        "interpolated ramp curves"
    );
    Ok(DefinitionResponse::new(curves, generator.table().stops()))
}

/// Every named family with its primary color.
pub fn families(state: &SharedState) -> FamiliesResponse {
    let generator = state.generator();
    let families = HueFamily::ALL
        .into_iter()
        .zip(generator.family_primaries())
        .map(|(family, (name, primary))| FamilySummary {
            name: name.to_string(),
            hue: family.hue(),
            grayscale: family.is_grayscale(),
            primary: primary.into(),
        })
        .collect();
    FamiliesResponse { families }
}

/// Default-length ramp of a named family.
pub fn family_ramp(state: &SharedState, name: &str) -> Result<RampResponse, ServiceError> {
    let family = HueFamily::from_name(name)
        .ok_or_else(|| ServiceError::NotFound(format!("family {name:?}")))?;
    let ramp = state.generator().family_ramp(family);
    info!(family = family.name(), "generated family ramp");
    Ok(RampResponse::from(&ramp))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        color::LchColor,
        ramp::{STEP_COUNT, STOP_TOKENS},
        state::AppState,
    };

    fn state() -> SharedState {
        Arc::new(AppState::default())
    }

    fn query(hue: f64, steps: Option<usize>, grayscale: bool) -> RampQuery {
        RampQuery {
            hue,
            steps,
            grayscale,
        }
    }

    #[test]
    fn default_ramp_carries_tokens() {
        let response = ramp(&state(), &query(210.0, None, false)).unwrap();
        assert_eq!(response.steps, STEP_COUNT);
        let tokens: Vec<_> = response.stops.iter().filter_map(|s| s.token).collect();
        assert_eq!(tokens, STOP_TOKENS.to_vec());
        assert_eq!(response.stops[4].color.l, 70.0);
    }

    #[test]
    fn negative_zero_hue_is_reported_as_zero() {
        let response = ramp(&state(), &query(-0.0, None, false)).unwrap();
        assert!(response.hue.is_sign_positive());
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["hue"].to_string(), "0.0");
    }

    #[test]
    fn resampled_ramp_drops_tokens() {
        let response = ramp(&state(), &query(30.0, Some(5), true)).unwrap();
        assert_eq!(response.stops.len(), 5);
        assert!(response.grayscale);
        assert!(response.stops.iter().all(|s| s.token.is_none()));
        assert!(response.stops.iter().all(|s| s.color.c == 0.0));
    }

    #[test]
    fn rejects_bad_steps_and_hues() {
        assert!(matches!(
            ramp(&state(), &query(10.0, Some(0), false)),
            Err(ServiceError::InvalidInput(_))
        ));
        assert!(matches!(
            ramp(&state(), &query(10.0, Some(MAX_STEPS + 1), false)),
            Err(ServiceError::InvalidInput(_))
        ));
        assert!(matches!(
            ramp(&state(), &query(f64::NAN, None, false)),
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn primary_for_blue() {
        let color = primary(
            &state(),
            &PrimaryQuery {
                hue: 210.0,
                grayscale: false,
            },
        )
        .unwrap();
        let expected: ColorSnapshot = LchColor::new(70.0, 37.0, 209.0).into();
        assert_eq!(color, expected);
    }

    #[test]
    fn definition_reports_anchor_bracket() {
        let response = definition(&state(), &DefinitionQuery { hue: 200.0 }).unwrap();
        assert_eq!(response.lower_anchor, 190.0);
        assert_eq!(response.upper_anchor, 210.0);
        assert!((response.weight - 0.5).abs() < 1e-12);
        assert_eq!(response.stops, STOP_TOKENS.to_vec());
        assert_eq!(response.lightness.len(), STEP_COUNT);
    }

    #[test]
    fn families_are_listed_gray_first() {
        let response = families(&state());
        assert_eq!(response.families.len(), HueFamily::ALL.len());
        assert_eq!(response.families[0].name, "gray");
        assert!(response.families[0].grayscale);
        assert_eq!(response.families[0].primary.c, 0.0);
    }

    #[test]
    fn family_lookup() {
        let response = family_ramp(&state(), "Blue").unwrap();
        assert_eq!(response.steps, STEP_COUNT);
        assert!(matches!(
            family_ramp(&state(), "mauve"),
            Err(ServiceError::NotFound(_))
        ));
    }
}
