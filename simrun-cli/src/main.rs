//! ## simrun-cli
//! **Simulator runner entrypoint**
//!
//! Runs the HDL simulators configured for one verification component and
//! writes `status.txt` at the component root. Without arguments it behaves
//! like `simrun run` in the current directory.

use std::process::ExitCode;

use clap::Parser;

mod commands;

use commands::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    commands::run_command(cli).await
}
