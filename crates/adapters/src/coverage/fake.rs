// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake coverage reporter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{CoverageError, CoverageReporter};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded coverage upload
#[derive(Debug, Clone)]
pub struct CoverageCall {
    pub workspace: PathBuf,
}

/// Fake coverage reporter for testing
#[derive(Clone, Default)]
pub struct FakeCoverageReporter {
    calls: Arc<Mutex<Vec<CoverageCall>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl FakeCoverageReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every publish fail with the given message
    pub fn failing(message: &str) -> Self {
        let fake = Self::default();
        *fake.fail_with.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.to_string());
        fake
    }

    /// Get all recorded uploads
    pub fn calls(&self) -> Vec<CoverageCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl CoverageReporter for FakeCoverageReporter {
    async fn publish(&self, workspace: &Path) -> Result<(), CoverageError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(CoverageCall {
                workspace: workspace.to_path_buf(),
            });

        let fail_with = self.fail_with.lock().unwrap_or_else(|e| e.into_inner()).clone();
        if let Some(message) = fail_with {
            return Err(CoverageError::CommandFailed(message));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
