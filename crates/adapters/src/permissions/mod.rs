// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace permission adapters

mod fs;

pub use fs::FsPermissionReset;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePermissionReset, PermissionCall};

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from permission resets
#[derive(Debug, Error)]
pub enum PermissionError {
    #[error("failed to set permissions on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Adapter that relaxes workspace file permissions after the container
/// step, so host-side cleanup can remove files created by the
/// container's user.
#[async_trait]
pub trait PermissionReset: Clone + Send + Sync + 'static {
    /// Recursively set world-read/write/execute on `path`
    async fn open_all(&self, path: &Path) -> Result<(), PermissionError>;
}
