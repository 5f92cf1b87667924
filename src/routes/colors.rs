use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::color::{ColorSnapshot, LerpRequest, ParseQuery, StopQuery},
    error::AppError,
    services::color_service,
    state::SharedState,
};

#[utoipa::path(
    get,
    path = "/colors/parse",
    tag = "colors",
    params(ParseQuery),
    responses(
        (status = 200, description = "Parsed color", body = ColorSnapshot),
        (status = 400, description = "Literal could not be parsed")
    )
)]
/// Parse an `lch()` literal.
pub async fn parse_color(Query(query): Query<ParseQuery>) -> Result<Json<ColorSnapshot>, AppError> {
    query.validate()?;
    Ok(Json(color_service::parse(&query)?))
}

#[utoipa::path(
    get,
    path = "/colors/stop",
    tag = "colors",
    params(StopQuery),
    responses(
        (status = 200, description = "Stop of the color's ramp", body = ColorSnapshot),
        (status = 400, description = "Literal could not be parsed")
    )
)]
/// Look up a stop of the ramp a color belongs to.
pub async fn stop_color(
    State(state): State<SharedState>,
    Query(query): Query<StopQuery>,
) -> Result<Json<ColorSnapshot>, AppError> {
    query.validate()?;
    Ok(Json(color_service::stop(&state, &query)?))
}

#[utoipa::path(
    post,
    path = "/colors/lerp",
    tag = "colors",
    request_body = LerpRequest,
    responses(
        (status = 200, description = "Interpolated color", body = ColorSnapshot),
        (status = 400, description = "Channel or factor out of range")
    )
)]
/// Interpolate between two colors.
pub async fn lerp_colors(Json(request): Json<LerpRequest>) -> Result<Json<ColorSnapshot>, AppError> {
    request.validate()?;
    Ok(Json(color_service::lerp(&request)))
}

/// Configure the color routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/colors/parse", get(parse_color))
        .route("/colors/stop", get(stop_color))
        .route("/colors/lerp", post(lerp_colors))
}
