//! Filesystem side effects: output directory cleanup and the status file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::RunError;
use crate::report::RunReport;

/// Recursively remove a simulator output directory.
///
/// Returns whether anything was removed. A missing directory is not an error.
pub fn clean_output_dir(path: &Path) -> Result<bool, RunError> {
    match fs::remove_dir_all(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed output directory");
            Ok(true)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(RunError::Cleanup {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Replace the status file with the rendered report. Never appends.
pub fn write_status_file(path: &Path, report: &RunReport) -> Result<(), RunError> {
    let to_err = |source: std::io::Error| RunError::StatusFile {
        path: path.to_path_buf(),
        source,
    };

    match fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "removed previous status file"),
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(to_err(err)),
    }

    fs::write(path, report.render()).map_err(to_err)
}
