// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Docker container runtime adapter

use super::{ContainerError, ContainerRuntime};
use async_trait::async_trait;
use barge_core::ContainerSpec;
use tokio::process::Command;

/// Docker-compatible container runtime.
///
/// `program` is the runtime executable; podman works too since only the
/// `run` surface is used.
#[derive(Clone)]
pub struct DockerRuntime {
    program: String,
}

impl DockerRuntime {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Render the argv for `spec`, minus the program itself
    pub fn run_args(spec: &ContainerSpec) -> Vec<String> {
        let mut args = vec!["run".to_string()];
        if spec.remove {
            args.push("--rm".to_string());
        }
        for mount in &spec.mounts {
            args.push("-v".to_string());
            let mut binding = format!("{}:{}", mount.host.display(), mount.container.display());
            if mount.read_only {
                binding.push_str(":ro");
            }
            args.push(binding);
        }
        args.push("-u".to_string());
        args.push(spec.user.clone());
        args.push(spec.image.clone());
        args.extend(spec.command.iter().cloned());
        args
    }
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn run(&self, spec: &ContainerSpec) -> Result<i32, ContainerError> {
        let args = Self::run_args(spec);
        tracing::debug!(program = %self.program, args = ?args, "invoking container runtime");

        // Inherit stdio so test output streams straight to the job log
        let status = Command::new(&self.program)
            .args(args)
            .status()
            .await
            .map_err(|source| ContainerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        Ok(status.code().unwrap_or(-1))
    }
}
