// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline stage runner
//!
//! Executes the fixed three-stage sequence (checkout, containerized
//! tests, coverage) inside a single error boundary, then always runs the
//! finalization slot. No retries anywhere: every failure is terminal for
//! the remaining scoped stages of that run.

use crate::StageError;
use barge_adapters::{Checkout, ContainerRuntime, CoverageReporter, PermissionReset};
use barge_core::{ContainerSpec, PipelineConfig, PipelineRun};
use std::time::Instant;

/// Callback invoked exactly once per run, after the error boundary.
///
/// Nothing is registered in production today; the slot exists so cleanup
/// steps can be added without touching the boundary.
pub type Finalizer = Box<dyn Fn(&PipelineRun) + Send + Sync>;

/// Executes one pipeline run using the configured adapters
pub struct PipelineRunner<C, R, V, P> {
    config: PipelineConfig,
    checkout: C,
    containers: R,
    coverage: V,
    permissions: P,
    finalizer: Option<Finalizer>,
}

impl<C, R, V, P> PipelineRunner<C, R, V, P>
where
    C: Checkout,
    R: ContainerRuntime,
    V: CoverageReporter,
    P: PermissionReset,
{
    /// Create a new runner
    pub fn new(config: PipelineConfig, checkout: C, containers: R, coverage: V, permissions: P) -> Self {
        Self {
            config,
            checkout,
            containers,
            coverage,
            permissions,
            finalizer: None,
        }
    }

    /// Register the finalization callback
    pub fn with_finalizer(mut self, finalizer: Finalizer) -> Self {
        self.finalizer = Some(finalizer);
        self
    }

    /// Execute the pipeline once.
    ///
    /// Never returns an error: any stage failure is caught here, flips
    /// the run's status to FAILURE and is suppressed. The orchestrator
    /// reads the outcome off the returned run.
    pub async fn execute(&self) -> PipelineRun {
        let mut run = PipelineRun::new(self.config.workspace.clone());

        tracing::info!(
            run_id = %run.id,
            workspace = %run.workspace.display(),
            "starting pipeline"
        );

        if let Err(err) = self.scoped_stages(&mut run).await {
            tracing::error!(run_id = %run.id, error = %err, "pipeline stage failed");
            run.fail(err.to_string());
        }

        self.finalize(&run);

        tracing::info!(run_id = %run.id, status = %run.status, "pipeline finished");
        run
    }

    /// The stages covered by the error boundary, in fixed order
    async fn scoped_stages(&self, run: &mut PipelineRun) -> Result<(), StageError> {
        self.stage_checkout(run).await?;
        self.stage_test(run).await?;
        self.stage_coverage(run).await?;
        Ok(())
    }

    /// Stage 1: acquire the source tree into the workspace
    async fn stage_checkout(&self, run: &PipelineRun) -> Result<(), StageError> {
        let span = tracing::info_span!("stage", name = "checkout");
        let _guard = span.enter();

        let start = Instant::now();
        self.checkout
            .acquire(&self.config.checkout, &run.workspace)
            .await?;
        tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "completed");

        Ok(())
    }

    /// Stage 2: run the containerized test command, then relax workspace
    /// permissions whatever the outcome
    async fn stage_test(&self, run: &mut PipelineRun) -> Result<(), StageError> {
        let span = tracing::info_span!("stage", name = "test");
        let _guard = span.enter();

        let start = Instant::now();
        let spec = ContainerSpec::for_workspace(&self.config.container, &run.workspace);
        let result = self.containers.run(&spec).await;

        // Files written by the container's user would otherwise be
        // undeletable by host-side job cleanup, so the reset runs whether
        // the container passed, failed or never started. Best-effort.
        if let Err(err) = self.permissions.open_all(&run.workspace).await {
            tracing::warn!(error = %err, "failed to relax workspace permissions");
        }

        match result? {
            0 => {
                run.succeed();
                tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "completed");
                Ok(())
            }
            code => {
                // A failing test suite is a recorded outcome, not an
                // abort: the coverage stage still runs its gate and
                // reports the skip.
                run.fail(format!("test command exited with code {code}"));
                tracing::error!(exit_code = code, "test command failed");
                Ok(())
            }
        }
    }

    /// Stage 3: report coverage, gated on the build result so far
    async fn stage_coverage(&self, run: &PipelineRun) -> Result<(), StageError> {
        let span = tracing::info_span!("stage", name = "coverage");
        let _guard = span.enter();

        if !run.is_success() {
            tracing::warn!(
                status = %run.status,
                "skipping coverage publish; build did not succeed"
            );
            return Ok(());
        }

        let start = Instant::now();
        self.coverage.publish(&run.workspace).await?;
        tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "completed");

        Ok(())
    }

    /// The guaranteed-execution slot: runs exactly once per pipeline,
    /// after the boundary, whether the stages succeeded or failed
    fn finalize(&self, run: &PipelineRun) {
        if let Some(finalizer) = &self.finalizer {
            finalizer(run);
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
