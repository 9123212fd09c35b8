// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source checkout adapters

mod git;

pub use git::GitCheckout;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{CheckoutCall, FakeCheckout};

use async_trait::async_trait;
use barge_core::CheckoutConfig;
use std::path::Path;
use thiserror::Error;

/// Errors from checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("repository or ref not found: {0}")]
    NotFound(String),
    #[error("command failed: {0}")]
    CommandFailed(String),
}

/// Adapter for acquiring the source tree into the workspace
#[async_trait]
pub trait Checkout: Clone + Send + Sync + 'static {
    /// Populate `workspace` with the configured source tree
    async fn acquire(&self, source: &CheckoutConfig, workspace: &Path)
        -> Result<(), CheckoutError>;
}
