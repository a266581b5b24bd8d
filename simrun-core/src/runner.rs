//! Sequential simulator runner.
//!
//! For every configured simulator, in order: remove the output directory,
//! run the simulator in the simulation folder, classify the exit code, and
//! remove the output directory again. A failing simulator is recorded and
//! the next one still runs. Only launch and filesystem faults abort.

use std::path::Path;
use std::time::Instant;

use opentelemetry::KeyValue;
use simrun_config::{ComponentPaths, SimrunConfig, SimulatorConfig};
use simrun_telemetry::{EventLogger, MetricsRecorder, Transcript};
use tracing::{debug, info, instrument, warn};

use crate::error::RunError;
use crate::process::{ProcessLauncher, SystemLauncher};
use crate::report::{Outcome, RunRecord, RunReport};
use crate::workspace::clean_output_dir;

pub struct SimulationRunner<L = SystemLauncher> {
    component: String,
    paths: ComponentPaths,
    simulators: Vec<SimulatorConfig>,
    launcher: L,
    metrics: Option<MetricsRecorder>,
}

impl SimulationRunner<SystemLauncher> {
    pub fn new(config: &SimrunConfig, root: &Path) -> Self {
        Self {
            component: config.component.name.clone(),
            paths: config.paths(root),
            simulators: config.simulators.clone(),
            launcher: SystemLauncher,
            metrics: None,
        }
    }
}

impl<L: ProcessLauncher> SimulationRunner<L> {
    pub fn with_launcher<M: ProcessLauncher>(self, launcher: M) -> SimulationRunner<M> {
        SimulationRunner {
            component: self.component,
            paths: self.paths,
            simulators: self.simulators,
            launcher,
            metrics: self.metrics,
        }
    }

    pub fn with_metrics(mut self, metrics: MetricsRecorder) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn paths(&self) -> &ComponentPaths {
        &self.paths
    }

    /// Run every simulator once, in order, echoing report lines to
    /// `transcript` as they are produced.
    #[instrument(level = "info", name = "run_all", skip_all, fields(component = %self.component))]
    pub async fn run_all(&self, transcript: &mut Transcript) -> Result<RunReport, RunError> {
        let mut report = RunReport::new(self.component.clone());
        for line in report.header_lines() {
            transcript.line(&line);
        }

        for simulator in &self.simulators {
            let record = self.run_one(simulator).await?;
            for line in record.report_lines() {
                transcript.line(&line);
            }
            report.push(record);
        }

        info!(
            runs = report.records().len(),
            failures = report.has_failures(),
            "all simulators finished"
        );
        Ok(report)
    }

    #[instrument(level = "info", name = "simulator", skip_all, fields(label = %simulator.label))]
    async fn run_one(&self, simulator: &SimulatorConfig) -> Result<RunRecord, RunError> {
        clean_output_dir(&self.paths.output_dir)?;

        let command = simulator.command_line();
        debug!(%command, cwd = %self.paths.sim_dir.display(), "launching");
        let started = Instant::now();
        let output = self
            .launcher
            .launch(simulator, &self.paths.sim_dir)
            .await
            .map_err(|source| RunError::Spawn {
                label: simulator.label.clone(),
                command: command.clone(),
                source,
            })?;
        let duration = started.elapsed();

        let outcome = if output.success() {
            info!(elapsed = ?duration, "PASS");
            Outcome::Pass
        } else {
            warn!(exit_code = ?output.exit_code, elapsed = ?duration, "FAILED");
            Outcome::Failed {
                stderr: output.stderr,
            }
        };
        debug!(stdout_bytes = output.stdout.len(), "runner stdout discarded");

        clean_output_dir(&self.paths.output_dir)?;

        if let Some(metrics) = &self.metrics {
            metrics.record_runner(&simulator.label, outcome.is_pass(), duration.as_secs_f64());
        }
        EventLogger::log_event(
            "simulator_finished",
            vec![
                KeyValue::new("label", simulator.label.clone()),
                KeyValue::new("outcome", outcome.keyword()),
                KeyValue::new("exit_code", output.exit_code.map_or(-1, i64::from)),
            ],
        )
        .await;

        Ok(RunRecord {
            label: simulator.label.clone(),
            outcome,
            exit_code: output.exit_code,
            duration,
        })
    }
}

/// Run the configured simulators for the component rooted at `root`,
/// echoing report lines to stdout when `log_to_transcript` is set.
pub async fn run_all_simulators(
    config: &SimrunConfig,
    root: &Path,
    log_to_transcript: bool,
) -> Result<RunReport, RunError> {
    let mut transcript = Transcript::stdout(log_to_transcript);
    SimulationRunner::new(config, root)
        .run_all(&mut transcript)
        .await
}
