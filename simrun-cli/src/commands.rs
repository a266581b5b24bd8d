use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use simrun_config::SimrunConfig;
use simrun_core::prelude::*;
use simrun_telemetry::{EventLogger, MetricsRecorder, Transcript};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Defaults to `run` in the current directory.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every configured simulator and write the status file
    Run(RunArgs),
    /// Remove the simulator output directory
    Clean(ComponentArgs),
    /// List the configured simulators in invocation order
    List(ComponentArgs),
    /// Print the effective configuration as YAML
    Config(ComponentArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ComponentArgs {
    /// Component root containing the simulation folder
    #[arg(short = 'C', long, default_value = ".")]
    pub component_root: PathBuf,
    /// Extra YAML configuration layered over `simrun.yaml`
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Default for ComponentArgs {
    fn default() -> Self {
        Self {
            component_root: PathBuf::from("."),
            config: None,
        }
    }
}

impl ComponentArgs {
    fn load(&self) -> anyhow::Result<SimrunConfig> {
        let config = SimrunConfig::load(&self.component_root, self.config.as_deref())
            .context("failed to load configuration")?;
        EventLogger::init(&config.telemetry.log_level);
        Ok(config)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub component: ComponentArgs,
    /// Do not echo report lines to the console
    #[arg(short, long)]
    pub quiet: bool,
    /// Exit non-zero when any simulator failed
    #[arg(long)]
    pub strict: bool,
    /// Write Prometheus metrics for the run to this file
    #[arg(long)]
    pub metrics_out: Option<PathBuf>,
}

pub async fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            let report = run(&args).await?;
            if args.strict && report.has_failures() {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Clean(args) => clean(args),
        Commands::List(args) => list(args),
        Commands::Config(args) => show_config(args),
    }
}

async fn run(args: &RunArgs) -> anyhow::Result<RunReport> {
    let config = args.component.load()?;
    let metrics = MetricsRecorder::new().context("failed to register metrics")?;
    let mut transcript = Transcript::stdout(config.telemetry.transcript && !args.quiet);

    let runner = SimulationRunner::new(&config, &args.component.component_root)
        .with_metrics(metrics.clone());
    let report = runner
        .run_all(&mut transcript)
        .await
        .context("simulation run aborted")?;

    let status_file = &runner.paths().status_file;
    write_status_file(status_file, &report)?;
    info!(path = %status_file.display(), "status file written");

    if let Some(path) = &args.metrics_out {
        let text = metrics.gather_metrics()?;
        fs::write(path, text)
            .with_context(|| format!("failed to write metrics to {}", path.display()))?;
    }

    Ok(report)
}

fn clean(args: ComponentArgs) -> anyhow::Result<ExitCode> {
    let config = args.load()?;
    let output_dir = config.paths(&args.component_root).output_dir;
    if clean_output_dir(&output_dir)? {
        println!("Removed {}", output_dir.display());
    } else {
        println!("Nothing to remove at {}", output_dir.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn list(args: ComponentArgs) -> anyhow::Result<ExitCode> {
    let config = args.load()?;
    for (index, sim) in config.simulators.iter().enumerate() {
        println!("{}. {} : {}", index + 1, sim.label, sim.command_line());
    }
    Ok(ExitCode::SUCCESS)
}

fn show_config(args: ComponentArgs) -> anyhow::Result<ExitCode> {
    let config = args.load()?;
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(ExitCode::SUCCESS)
}
