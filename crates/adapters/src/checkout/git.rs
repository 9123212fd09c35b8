// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Git checkout adapter

use super::{Checkout, CheckoutError};
use async_trait::async_trait;
use barge_core::CheckoutConfig;
use std::path::Path;
use tokio::process::Command;

/// Git-based checkout adapter
#[derive(Clone, Default)]
pub struct GitCheckout;

impl GitCheckout {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Checkout for GitCheckout {
    async fn acquire(
        &self,
        source: &CheckoutConfig,
        workspace: &Path,
    ) -> Result<(), CheckoutError> {
        tracing::debug!(url = %source.url, branch = %source.branch, "cloning source");

        let output = Command::new("git")
            .arg("clone")
            .arg("--branch")
            .arg(&source.branch)
            .arg("--single-branch")
            .arg(&source.url)
            .arg(workspace)
            .output()
            .await
            .map_err(|e| CheckoutError::CommandFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("not found") || stderr.contains("does not exist") {
                return Err(CheckoutError::NotFound(source.url.clone()));
            }
            return Err(CheckoutError::CommandFailed(stderr.to_string()));
        }

        Ok(())
    }
}
