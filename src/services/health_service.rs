use tracing::debug;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report the shape of the ramp table the service is running with.
pub fn health_status(state: &SharedState) -> HealthResponse {
    let table = state.generator().table();
    debug!(
        anchors = table.anchors().len(),
        steps = table.step_count(),
        "health probe"
    );
    HealthResponse::ok(table.anchors().len(), table.step_count())
}
