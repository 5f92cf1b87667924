//! Request-independent logic behind the HTTP routes.

/// Color parsing, interpolation and stop lookup.
pub mod color_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Ramp generation, curve inspection and named families.
pub mod ramp_service;

use crate::error::ServiceError;

/// Reject hues that cannot be normalized onto the color wheel.
pub(crate) fn ensure_finite_hue(hue: f64) -> Result<f64, ServiceError> {
    if hue.is_finite() {
        Ok(hue)
    } else {
        Err(ServiceError::InvalidInput(format!(
            "hue must be a finite number of degrees, got {hue}"
        )))
    }
}
