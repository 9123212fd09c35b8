// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execute the pipeline

use crate::output::{self, OutputFormat};
use anyhow::Result;
use barge_adapters::{CommandReporter, DockerRuntime, FsPermissionReset, GitCheckout};
use barge_core::PipelineConfig;
use barge_engine::PipelineRunner;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the pipeline configuration
    #[arg(long, default_value = "barge.toml")]
    pub config: PathBuf,

    /// Override the configured workspace directory
    #[arg(long)]
    pub workspace: Option<PathBuf>,

    /// Output format for the final result
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let mut config = PipelineConfig::load(&args.config)?;
    if let Some(workspace) = args.workspace {
        config.workspace = workspace;
    }
    // The workspace doubles as a bind-mount path, which must be absolute
    if config.workspace.is_relative() {
        config.workspace = std::env::current_dir()?.join(&config.workspace);
    }

    tracing::debug!(config = ?config, "loaded pipeline configuration");

    let containers = DockerRuntime::new(config.container.runtime.clone());
    let coverage = CommandReporter::new(config.coverage.command.clone());
    let runner = PipelineRunner::new(
        config,
        GitCheckout::new(),
        containers,
        coverage,
        FsPermissionReset::new(),
    );

    let run = runner.execute().await;
    output::print_result(&run, args.format);

    // The outcome travels in the printed build result; the process exits
    // cleanly either way, matching what the orchestrator expects.
    Ok(())
}
