//! Component layout configuration.
//!
//! Describes where a verification component keeps its simulation folder,
//! which directory the simulators leave behind and where the status report
//! goes. All paths are relative to the component root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// Filesystem layout of one verification component.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct ComponentConfig {
    /// Component name printed at the top of the report.
    #[serde(default = "default_name")]
    #[validate(length(min = 1))]
    pub name: String,

    /// Simulation folder, relative to the component root. `.` runs the
    /// simulators from the root itself.
    #[serde(default = "default_sim_dir")]
    #[validate(custom(function = validation::validate_confined_dir))]
    pub sim_dir: String,

    /// Simulator output directory, relative to the simulation folder.
    #[serde(default = "default_output_dir")]
    #[validate(custom(function = validation::validate_removable_dir))]
    pub output_dir: String,

    /// Status report file name, written at the component root.
    #[serde(default = "default_status_file")]
    #[validate(custom(function = validation::validate_file_name))]
    pub status_file: String,
}

fn default_name() -> String {
    "uvvm_vvc_framework".into()
}

fn default_sim_dir() -> String {
    "sim".into()
}

fn default_output_dir() -> String {
    "vunit_out".into()
}

fn default_status_file() -> String {
    "status.txt".into()
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            sim_dir: default_sim_dir(),
            output_dir: default_output_dir(),
            status_file: default_status_file(),
        }
    }
}

/// Absolute locations derived from a [`ComponentConfig`] and a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPaths {
    pub sim_dir: PathBuf,
    pub output_dir: PathBuf,
    pub status_file: PathBuf,
}

impl ComponentConfig {
    pub fn resolve(&self, root: &Path) -> ComponentPaths {
        let sim_dir = root.join(&self.sim_dir);
        ComponentPaths {
            output_dir: sim_dir.join(&self.output_dir),
            status_file: root.join(&self.status_file),
            sim_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_against_root() {
        let paths = ComponentConfig::default().resolve(Path::new("/work/uvvm_vvc_framework"));
        assert_eq!(paths.sim_dir, Path::new("/work/uvvm_vvc_framework/sim"));
        assert_eq!(
            paths.output_dir,
            Path::new("/work/uvvm_vvc_framework/sim/vunit_out")
        );
        assert_eq!(
            paths.status_file,
            Path::new("/work/uvvm_vvc_framework/status.txt")
        );
    }

    #[test]
    fn sim_dir_may_be_component_root() {
        let config = ComponentConfig {
            sim_dir: ".".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let paths = config.resolve(Path::new("/work/c"));
        assert_eq!(paths.output_dir, Path::new("/work/c/./vunit_out"));
    }

    #[test]
    fn output_dir_may_not_be_sim_dir_itself() {
        let config = ComponentConfig {
            output_dir: ".".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_parent_sim_dir() {
        let config = ComponentConfig {
            sim_dir: "../sim".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_parent_output_dir() {
        let config = ComponentConfig {
            output_dir: "../vunit_out".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
