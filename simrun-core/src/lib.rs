//! # simrun-core
//!
//! Runs the HDL simulator runners configured for one verification component,
//! one after another, and turns their exit codes into a status report.
//!
//! ### Key Submodules:
//! - `runner`: sequential invocation and outcome classification
//! - `process`: the `ProcessLauncher` seam over `tokio::process`
//! - `report`: structured records and the status text layout
//! - `workspace`: output directory cleanup and status file writing

pub mod error;
pub mod process;
pub mod report;
pub mod runner;
pub mod workspace;

pub mod prelude {
    pub use crate::error::RunError;
    pub use crate::process::{ProcessLauncher, ProcessOutput, SystemLauncher};
    pub use crate::report::{Outcome, RunRecord, RunReport};
    pub use crate::runner::{run_all_simulators, SimulationRunner};
    pub use crate::workspace::{clean_output_dir, write_status_file};
}

pub use error::RunError;
pub use report::RunReport;
pub use runner::{run_all_simulators, SimulationRunner};
