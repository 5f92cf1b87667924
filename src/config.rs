//! Application-level configuration loading, including an optional ramp table override.

use std::{env, fs, io::ErrorKind, path::PathBuf, sync::Arc};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::ramp::{DefinitionError, RampDefinition, RampTable, builtin};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/ramps.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "COLOR_TOKENS_CONFIG_PATH";

/// Reasons a configuration document is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the expected shape.
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    /// The ramp table failed validation.
    #[error("invalid ramp table: {0}")]
    Table(#[from] DefinitionError),
}

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    ramps: Arc<RampTable>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the built-in ramp table.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|err| {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "invalid ramp config; falling back to defaults"
                );
                Self::default()
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in ramp table"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse and validate a JSON document.
    fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let raw = serde_json::from_str::<RawConfig>(contents)?;
        let table = RampTable::try_from(raw)?;
        info!(
            anchors = table.anchors().len(),
            steps = table.step_count(),
            "loaded ramp table from config"
        );
        Ok(Self {
            ramps: Arc::new(table),
        })
    }

    /// The ramp table every generator should read from.
    pub fn ramps(&self) -> Arc<RampTable> {
        Arc::clone(&self.ramps)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { ramps: builtin() }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    stops: Vec<u32>,
    anchors: Vec<RawAnchor>,
}

impl TryFrom<RawConfig> for RampTable {
    type Error = DefinitionError;

    fn try_from(value: RawConfig) -> Result<Self, Self::Error> {
        let anchors = value.anchors.into_iter().map(Into::into).collect();
        RampTable::new(value.stops, anchors)
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of a single anchor inside the configuration file.
struct RawAnchor {
    hue: f64,
    lightness: Vec<f64>,
    chroma: Vec<f64>,
    #[serde(default)]
    hue_shift: Option<Vec<f64>>,
}

impl From<RawAnchor> for RampDefinition {
    fn from(value: RawAnchor) -> Self {
        let hue_shift = value
            .hue_shift
            .unwrap_or_else(|| vec![0.0; value.lightness.len()]);
        Self {
            base_hue: value.hue,
            lightness: value.lightness,
            chroma: value.chroma,
            hue_shift,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_valid_table() {
        let config = AppConfig::from_json(
            r#"{
                "stops": [100, 500, 900],
                "anchors": [
                    { "hue": 200, "lightness": [90, 50, 20], "chroma": [5, 30, 15], "hue_shift": [-2, 0, 4] },
                    { "hue": 20, "lightness": [92, 55, 22], "chroma": [8, 40, 20] }
                ]
            }"#,
        )
        .unwrap();

        let table = config.ramps();
        assert_eq!(table.stops(), &[100, 500, 900]);
        assert_eq!(table.anchors()[0].base_hue, 20.0);
        assert_eq!(table.anchors()[0].hue_shift, vec![0.0, 0.0, 0.0]);
        assert_eq!(table.anchors()[1].hue_shift, vec![-2.0, 0.0, 4.0]);
    }

    #[test]
    fn rejects_inconsistent_tables() {
        let err = AppConfig::from_json(
            r#"{ "stops": [1, 2], "anchors": [{ "hue": 0, "lightness": [1], "chroma": [1, 2] }] }"#,
        )
        .unwrap_err();
        assert!(
            matches!(
                err,
                ConfigError::Table(DefinitionError::LengthMismatch {
                    field: "lightness",
                    expected: 2,
                    actual: 1,
                    ..
                })
            ),
            "{err}"
        );

        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "stops": [1], "anchors": [] }"#),
            Err(ConfigError::Table(DefinitionError::NoAnchors))
        ));
    }

    #[test]
    fn default_uses_builtin_table() {
        assert!(Arc::ptr_eq(&AppConfig::default().ramps(), &builtin()));
    }
}
