use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok").
    pub status: String,
    /// Number of anchors in the active ramp table.
    pub anchors: usize,
    /// Default number of stops per ramp.
    pub steps: usize,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(anchors: usize, steps: usize) -> Self {
        Self {
            status: "ok".to_string(),
            anchors,
            steps,
        }
    }
}
