// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container runtime adapters

mod docker;

pub use docker::DockerRuntime;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ContainerCall, FakeContainerRuntime};

use async_trait::async_trait;
use barge_core::ContainerSpec;
use thiserror::Error;

/// Errors from the container runtime itself.
///
/// A non-zero exit from the in-container command is not an error here;
/// it comes back as the exit code for the caller to interpret.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("failed to invoke container runtime '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Adapter for running the test container
#[async_trait]
pub trait ContainerRuntime: Clone + Send + Sync + 'static {
    /// Run the container to completion, returning the command's exit code
    async fn run(&self, spec: &ContainerSpec) -> Result<i32, ContainerError>;
}
