// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage upload via an external command

use super::{CoverageError, CoverageReporter};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Runs the configured upload command in the workspace
#[derive(Clone)]
pub struct CommandReporter {
    command: Vec<String>,
}

impl CommandReporter {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

#[async_trait]
impl CoverageReporter for CommandReporter {
    async fn publish(&self, workspace: &Path) -> Result<(), CoverageError> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| CoverageError::CommandFailed("empty upload command".to_string()))?;

        let output = Command::new(program)
            .args(args)
            .current_dir(workspace)
            .output()
            .await
            .map_err(|e| CoverageError::CommandFailed(e.to_string()))?;

        if !output.status.success() {
            return Err(CoverageError::Failed {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(())
    }
}
