//! # simrun Configuration System
//!
//! Layered configuration for the simulator runner: built-in defaults for the
//! UVVM VVC framework component, an optional `simrun.yaml` in the component
//! root, an optional explicit file, then `SIMRUN_*` environment variables.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

mod component;
mod error;
mod simulator;
mod telemetry;
mod validation;

pub use component::{ComponentConfig, ComponentPaths};
pub use error::ConfigError;
pub use simulator::{default_simulators, SimulatorConfig};
pub use telemetry::TelemetryConfig;

/// File picked up from the component root when present.
pub const LOCAL_CONFIG_FILE: &str = "simrun.yaml";

/// Prefix for environment overrides, nested with `__`.
pub const ENV_PREFIX: &str = "SIMRUN_";

/// Top-level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
#[validate(schema(function = validate_simulator_list))]
pub struct SimrunConfig {
    /// Component layout (simulation folder, output directory, status file).
    #[serde(default)]
    #[validate(nested)]
    pub component: ComponentConfig,

    /// Runners in invocation order.
    #[serde(default = "default_simulators")]
    #[validate(nested)]
    pub simulators: Vec<SimulatorConfig>,

    /// Logging and transcript settings.
    #[serde(default)]
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

impl Default for SimrunConfig {
    fn default() -> Self {
        Self {
            component: ComponentConfig::default(),
            simulators: default_simulators(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

fn validate_simulator_list(config: &SimrunConfig) -> Result<(), ValidationError> {
    if config.simulators.is_empty() {
        return Err(ValidationError::new("no_simulators"));
    }
    validation::validate_unique_labels(&config.simulators)
}

impl SimrunConfig {
    /// Load configuration for the component rooted at `root`.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `<root>/simrun.yaml`, if present
    /// 3. `explicit`, which must exist when given
    /// 4. `SIMRUN_*` environment variables
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(SimrunConfig::default()));

        let local = root.join(LOCAL_CONFIG_FILE);
        if local.exists() {
            figment = figment.merge(Yaml::file(local));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        Self::extract(figment)
    }

    /// Load configuration from a specific path for testing/validation.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        Self::extract(
            Figment::from(Serialized::defaults(SimrunConfig::default())).merge(Yaml::file(path)),
        )
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Resolve the component layout against `root`.
    pub fn paths(&self, root: &Path) -> ComponentPaths {
        self.component.resolve(root)
    }
}
