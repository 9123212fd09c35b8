// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake checkout adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Checkout, CheckoutError};
use async_trait::async_trait;
use barge_core::CheckoutConfig;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded checkout call
#[derive(Debug, Clone)]
pub struct CheckoutCall {
    pub url: String,
    pub branch: String,
    pub workspace: PathBuf,
}

/// Fake checkout adapter for testing
#[derive(Clone, Default)]
pub struct FakeCheckout {
    calls: Arc<Mutex<Vec<CheckoutCall>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl FakeCheckout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every acquire fail with the given message
    pub fn failing(message: &str) -> Self {
        let fake = Self::default();
        *fake.fail_with.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.to_string());
        fake
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<CheckoutCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl Checkout for FakeCheckout {
    async fn acquire(
        &self,
        source: &CheckoutConfig,
        workspace: &Path,
    ) -> Result<(), CheckoutError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(CheckoutCall {
                url: source.url.clone(),
                branch: source.branch.clone(),
                workspace: workspace.to_path_buf(),
            });

        let fail_with = self.fail_with.lock().unwrap_or_else(|e| e.into_inner()).clone();
        if let Some(message) = fail_with {
            return Err(CheckoutError::CommandFailed(message));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
