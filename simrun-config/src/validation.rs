//! Custom validation functions for configuration.
//!
//! Provides shared validation logic used across multiple configuration modules.

use std::collections::HashSet;
use std::path::{Component, Path};

use validator::ValidationError;

use crate::simulator::SimulatorConfig;

/// Validate that a directory stays inside the directory it is resolved against.
///
/// `.` is accepted, so runners may be launched from the component root itself.
pub fn validate_confined_dir(dir: &str) -> Result<(), ValidationError> {
    if dir.trim().is_empty() {
        return Err(ValidationError::new("empty_path"));
    }
    let confined = Path::new(dir)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if confined {
        Ok(())
    } else {
        Err(ValidationError::new("path_escapes_root"))
    }
}

/// Validate a directory that gets removed recursively.
///
/// On top of [`validate_confined_dir`], the path must name an actual
/// subdirectory; `.` alone would wipe the simulation folder.
pub fn validate_removable_dir(dir: &str) -> Result<(), ValidationError> {
    validate_confined_dir(dir)?;
    let names_something = Path::new(dir)
        .components()
        .any(|c| matches!(c, Component::Normal(_)));

    if names_something {
        Ok(())
    } else {
        Err(ValidationError::new("path_names_no_directory"))
    }
}

/// Validate that a status file name is a bare file name.
pub fn validate_file_name(name: &str) -> Result<(), ValidationError> {
    let re = regex::Regex::new(r"^[^/\\]+$").map_err(|_| ValidationError::new("invalid_regex"))?;

    if re.is_match(name) && name != "." && name != ".." {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_file_name"))
    }
}

/// Validate that every simulator label is used once.
pub fn validate_unique_labels(simulators: &[SimulatorConfig]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for sim in simulators {
        if !seen.insert(sim.label.as_str()) {
            let mut err = ValidationError::new("duplicate_label");
            err.message = Some(format!("simulator label '{}' is used twice", sim.label).into());
            return Err(err);
        }
    }
    Ok(())
}
