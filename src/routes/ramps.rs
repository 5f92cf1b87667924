use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use validator::Validate;

use crate::{
    dto::{
        color::ColorSnapshot,
        ramp::{
            DefinitionQuery, DefinitionResponse, FamiliesResponse, PrimaryQuery, RampQuery,
            RampResponse,
        },
    },
    error::AppError,
    services::ramp_service,
    state::SharedState,
};

#[utoipa::path(
    get,
    path = "/ramps",
    tag = "ramps",
    params(RampQuery),
    responses(
        (status = 200, description = "Generated ramp, lightest first", body = RampResponse),
        (status = 400, description = "Invalid hue or step count")
    )
)]
/// Generate a ramp for any hue.
pub async fn get_ramp(
    State(state): State<SharedState>,
    Query(query): Query<RampQuery>,
) -> Result<Json<RampResponse>, AppError> {
    query.validate()?;
    Ok(Json(ramp_service::ramp(&state, &query)?))
}

#[utoipa::path(
    get,
    path = "/ramps/primary",
    tag = "ramps",
    params(PrimaryQuery),
    responses(
        (status = 200, description = "Representative color for the hue", body = ColorSnapshot),
        (status = 400, description = "Invalid hue")
    )
)]
/// Return the primary color of a hue's default ramp.
pub async fn get_primary(
    State(state): State<SharedState>,
    Query(query): Query<PrimaryQuery>,
) -> Result<Json<ColorSnapshot>, AppError> {
    Ok(Json(ramp_service::primary(&state, &query)?))
}

#[utoipa::path(
    get,
    path = "/ramps/definition",
    tag = "ramps",
    params(DefinitionQuery),
    responses(
        (status = 200, description = "Interpolated curves", body = DefinitionResponse),
        (status = 400, description = "Invalid hue")
    )
)]
/// Expose the lightness, chroma and hue-shift curves blended for a hue.
pub async fn get_definition(
    State(state): State<SharedState>,
    Query(query): Query<DefinitionQuery>,
) -> Result<Json<DefinitionResponse>, AppError> {
    Ok(Json(ramp_service::definition(&state, &query)?))
}

#[utoipa::path(
    get,
    path = "/families",
    tag = "ramps",
    responses((status = 200, description = "Named families and their primaries", body = FamiliesResponse))
)]
/// List every named hue family.
pub async fn list_families(State(state): State<SharedState>) -> Json<FamiliesResponse> {
    Json(ramp_service::families(&state))
}

#[utoipa::path(
    get,
    path = "/families/{name}",
    tag = "ramps",
    params(("name" = String, Path, description = "Family name, case-insensitive")),
    responses(
        (status = 200, description = "Default ramp of the family", body = RampResponse),
        (status = 404, description = "Unknown family")
    )
)]
/// Return the default ramp of a named family.
pub async fn get_family(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<RampResponse>, AppError> {
    Ok(Json(ramp_service::family_ramp(&state, &name)?))
}

/// Configure the ramp and family routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/ramps", get(get_ramp))
        .route("/ramps/primary", get(get_primary))
        .route("/ramps/definition", get(get_definition))
        .route("/families", get(list_families))
        .route("/families/{name}", get(get_family))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{http::StatusCode, response::IntoResponse};

    use super::*;
    use crate::state::AppState;

    fn state() -> State<SharedState> {
        State(Arc::new(AppState::default()))
    }

    #[tokio::test]
    async fn ramp_handler_validates_steps() {
        let query = RampQuery {
            hue: 120.0,
            steps: Some(65),
            grayscale: false,
        };
        let err = get_ramp(state(), Query(query)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn ramp_handler_returns_requested_steps() {
        let query = RampQuery {
            hue: 120.0,
            steps: Some(7),
            grayscale: false,
        };
        let Json(response) = get_ramp(state(), Query(query)).await.unwrap();
        assert_eq!(response.stops.len(), 7);
        assert_eq!(response.hue, 120.0);
    }

    #[tokio::test]
    async fn unknown_family_is_not_found() {
        let err = get_family(state(), Path("mauve".into())).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
