//! Observability configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Telemetry configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct TelemetryConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    #[validate(custom(function = validate_log_level))]
    pub log_level: String,

    /// Echo report lines to the console while running.
    #[serde(default = "default_true")]
    pub transcript: bool,
}

fn default_log_level() -> String {
    "warn".into()
}

fn default_true() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            transcript: default_true(),
        }
    }
}

fn validate_log_level(level: &str) -> Result<(), validator::ValidationError> {
    let valid =
        ["trace", "debug", "info", "warn", "error", "off"].contains(&level.to_lowercase().as_str());
    if valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_log_level"))
    }
}
