// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake container runtime for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ContainerError, ContainerRuntime};
use async_trait::async_trait;
use barge_core::ContainerSpec;
use std::sync::{Arc, Mutex};

/// Recorded container invocation
#[derive(Debug, Clone)]
pub struct ContainerCall {
    pub spec: ContainerSpec,
}

/// Fake container runtime for testing
#[derive(Clone)]
pub struct FakeContainerRuntime {
    calls: Arc<Mutex<Vec<ContainerCall>>>,
    exit_code: i32,
    spawn_error: Option<String>,
}

impl FakeContainerRuntime {
    /// Every run exits 0
    pub fn new() -> Self {
        Self::with_exit_code(0)
    }

    /// Every run exits with the given code
    pub fn with_exit_code(exit_code: i32) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            exit_code,
            spawn_error: None,
        }
    }

    /// Every run fails before the container starts
    pub fn erroring(message: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            exit_code: 0,
            spawn_error: Some(message.to_string()),
        }
    }

    /// Get all recorded invocations
    pub fn calls(&self) -> Vec<ContainerCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for FakeContainerRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContainerRuntime for FakeContainerRuntime {
    async fn run(&self, spec: &ContainerSpec) -> Result<i32, ContainerError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ContainerCall { spec: spec.clone() });

        if let Some(message) = &self.spawn_error {
            return Err(ContainerError::Spawn {
                program: "fake".to_string(),
                source: std::io::Error::other(message.clone()),
            });
        }

        Ok(self.exit_code)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
