// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validate the configuration without running anything

use anyhow::Result;
use barge_adapters::DockerRuntime;
use barge_core::{ContainerSpec, PipelineConfig};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the pipeline configuration
    #[arg(long, default_value = "barge.toml")]
    pub config: PathBuf,
}

pub fn check(args: CheckArgs) -> Result<()> {
    let config = PipelineConfig::load(&args.config)?;

    let spec = ContainerSpec::for_workspace(&config.container, &config.workspace);
    let argv = DockerRuntime::run_args(&spec);

    println!("workspace: {}", config.workspace.display());
    println!(
        "checkout:  {} (branch {})",
        config.checkout.url, config.checkout.branch
    );
    println!("test:      {} {}", config.container.runtime, argv.join(" "));
    println!("coverage:  {}", config.coverage.command.join(" "));

    Ok(())
}
