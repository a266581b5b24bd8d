//! Simulator runner configuration.
//!
//! Each entry names one external runner: the label written to the status
//! report and the command line used to launch it.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// One external simulator runner.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Label used in the report, e.g. `Modelsim`.
    #[validate(length(min = 1, max = 64))]
    pub label: String,

    /// Program to execute (looked up on `PATH`).
    #[validate(length(min = 1))]
    pub program: String,

    /// Fixed argument list.
    #[serde(default)]
    pub args: Vec<String>,
}

impl SimulatorConfig {
    pub fn new<I, S>(label: &str, program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.to_owned(),
            program: program.to_owned(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Command line as a single display string.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runners invoked when nothing else is configured: VUnit on Modelsim with
/// eight parallel threads, then Riviera Pro.
pub fn default_simulators() -> Vec<SimulatorConfig> {
    vec![
        SimulatorConfig::new("Modelsim", "py", ["internal_run.py", "-p8"]),
        SimulatorConfig::new("Riviera Pro", "py", ["internal_run_riviera_pro.py"]),
    ]
}
