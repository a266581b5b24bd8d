//! External process execution.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use simrun_config::SimulatorConfig;
use tokio::process::Command;

/// Captured result of one external process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Seam between the runner and the operating system.
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Run `simulator` in `cwd` to completion. An `Err` means the process
    /// could not be started at all.
    async fn launch(
        &self,
        simulator: &SimulatorConfig,
        cwd: &Path,
    ) -> std::io::Result<ProcessOutput>;
}

/// Spawns real processes and waits for them without a timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

#[async_trait]
impl ProcessLauncher for SystemLauncher {
    async fn launch(
        &self,
        simulator: &SimulatorConfig,
        cwd: &Path,
    ) -> std::io::Result<ProcessOutput> {
        let output = Command::new(&simulator.program)
            .args(&simulator.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
