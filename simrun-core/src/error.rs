use std::path::PathBuf;

use simrun_config::ConfigError;
use thiserror::Error;

/// Faults that abort a run. A runner exiting non-zero is not one of them;
/// that is recorded in the report.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to launch {label} (`{command}`): {source}")]
    Spawn {
        label: String,
        command: String,
        source: std::io::Error,
    },

    #[error("Failed to remove output directory {}: {source}", path.display())]
    Cleanup {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write status file {}: {source}", path.display())]
    StatusFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
