// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake permission reset for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PermissionError, PermissionReset};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded permission reset
#[derive(Debug, Clone)]
pub struct PermissionCall {
    pub path: PathBuf,
}

/// Fake permission reset for testing
#[derive(Clone, Default)]
pub struct FakePermissionReset {
    calls: Arc<Mutex<Vec<PermissionCall>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl FakePermissionReset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every reset fail with the given message
    pub fn failing(message: &str) -> Self {
        let fake = Self::default();
        *fake.fail_with.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.to_string());
        fake
    }

    /// Get all recorded resets
    pub fn calls(&self) -> Vec<PermissionCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl PermissionReset for FakePermissionReset {
    async fn open_all(&self, path: &Path) -> Result<(), PermissionError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(PermissionCall {
                path: path.to_path_buf(),
            });

        let fail_with = self.fail_with.lock().unwrap_or_else(|e| e.into_inner()).clone();
        if let Some(message) = fail_with {
            return Err(PermissionError::Io {
                path: path.display().to_string(),
                source: std::io::Error::other(message),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
