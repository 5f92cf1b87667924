use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the color token service.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::ramps::get_ramp,
        crate::routes::ramps::get_primary,
        crate::routes::ramps::get_definition,
        crate::routes::ramps::list_families,
        crate::routes::ramps::get_family,
        crate::routes::colors::parse_color,
        crate::routes::colors::stop_color,
        crate::routes::colors::lerp_colors,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::color::ColorSnapshot,
            crate::dto::color::RgbSnapshot,
            crate::dto::color::LchInput,
            crate::dto::color::LerpRequest,
            crate::dto::ramp::StopSnapshot,
            crate::dto::ramp::RampResponse,
            crate::dto::ramp::DefinitionResponse,
            crate::dto::ramp::FamilySummary,
            crate::dto::ramp::FamiliesResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "ramps", description = "Ramp generation and named hue families"),
        (name = "colors", description = "Color parsing, lookup and interpolation"),
    )
)]
pub struct ApiDoc;
