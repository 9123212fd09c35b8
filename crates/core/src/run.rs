// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline run context
//!
//! One `PipelineRun` is threaded through every stage. It owns the build
//! status flag that the pipeline's orchestrator reads back after the run.

use crate::status::BuildStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unique identifier for a pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub String);

impl RunId {
    pub fn new() -> Self {
        RunId(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context for one pipeline execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRun {
    pub id: RunId,
    /// Working directory holding the checked-out source tree. Exclusive
    /// to this run.
    pub workspace: PathBuf,
    pub status: BuildStatus,
    /// First recorded failure reason, if any. Diagnostic only; the
    /// reported outcome is always just `status`.
    pub failure: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PipelineRun {
    pub fn new(workspace: PathBuf) -> Self {
        Self {
            id: RunId::new(),
            workspace,
            status: BuildStatus::Unset,
            failure: None,
            created_at: Utc::now(),
        }
    }

    /// Mark the run successful
    pub fn succeed(&mut self) {
        self.status = BuildStatus::Success;
    }

    /// Record a failure: flips the status flag and keeps the first reason
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.status = BuildStatus::Failure;
        if self.failure.is_none() {
            self.failure = Some(reason.into());
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
