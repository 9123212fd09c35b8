// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage upload adapters

mod command;

pub use command::CommandReporter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{CoverageCall, FakeCoverageReporter};

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from coverage upload
#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("upload command exited with code {code}: {stderr}")]
    Failed { code: i32, stderr: String },
    #[error("command failed: {0}")]
    CommandFailed(String),
}

/// Adapter for the external coverage-upload routine.
///
/// The routine is an opaque collaborator; the only contract is
/// succeed-or-error.
#[async_trait]
pub trait CoverageReporter: Clone + Send + Sync + 'static {
    /// Upload coverage results from the workspace
    async fn publish(&self, workspace: &Path) -> Result<(), CoverageError>;
}
