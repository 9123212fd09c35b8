// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use barge_core::PipelineRun;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print the final run result in the chosen format
pub fn print_result(run: &PipelineRun, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("build result: {}", run.status),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(run) {
                println!("{}", json);
            }
        }
    }
}
