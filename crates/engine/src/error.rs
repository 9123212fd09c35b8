// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stage errors

use thiserror::Error;

/// Errors raised by the scoped pipeline stages.
///
/// Every kind is caught exactly once at the runner's boundary and maps
/// to the same FAILURE result; the distinction only reaches the logs.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("checkout error: {0}")]
    Checkout(#[from] barge_adapters::checkout::CheckoutError),
    #[error("container error: {0}")]
    Container(#[from] barge_adapters::container::ContainerError),
    #[error("coverage error: {0}")]
    Coverage(#[from] barge_adapters::coverage::CoverageError),
}
