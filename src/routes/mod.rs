//! HTTP route trees, one module per resource.

use axum::Router;

use crate::state::SharedState;

/// Color parsing, stop lookup and interpolation routes.
pub mod colors;
/// Swagger UI and OpenAPI document.
pub mod docs;
/// Health check route.
pub mod health;
/// Ramp generation and named family routes.
pub mod ramps;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(ramps::router())
        .merge(colors::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
