//! Shared, read-only application state.

use std::sync::Arc;

use crate::{config::AppConfig, ramp::RampGenerator};

/// Handle to [`AppState`] cloned into every handler.
pub type SharedState = Arc<AppState>;

/// Central application state: the read-only ramp generator every request shares.
pub struct AppState {
    generator: RampGenerator,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: &AppConfig) -> SharedState {
        Arc::new(Self {
            generator: RampGenerator::new(config.ramps()),
        })
    }

    /// Generator backed by the configured ramp table.
    pub fn generator(&self) -> &RampGenerator {
        &self.generator
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            generator: RampGenerator::default(),
        }
    }
}
