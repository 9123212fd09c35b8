// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed container invocation values
//!
//! The test container run is described as data (mounts, user, image,
//! command) and rendered to an argv by the runtime adapter. Nothing here
//! is ever interpolated into a shell string.

use crate::config::ContainerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Host user database, mounted read-only so the in-container test
/// process can resolve its user but never mutate host identity data.
pub const PASSWD_FILE: &str = "/etc/passwd";

/// A single bind mount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindMount {
    pub host: PathBuf,
    pub container: PathBuf,
    pub read_only: bool,
}

impl BindMount {
    pub fn read_write(host: impl Into<PathBuf>, container: impl Into<PathBuf>) -> Self {
        Self {
            host: host.into(),
            container: container.into(),
            read_only: false,
        }
    }

    pub fn read_only(host: impl Into<PathBuf>, container: impl Into<PathBuf>) -> Self {
        Self {
            host: host.into(),
            container: container.into(),
            read_only: true,
        }
    }
}

/// Everything needed to run the test container once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub image: String,
    /// Non-root user the command runs as
    pub user: String,
    pub mounts: Vec<BindMount>,
    pub command: Vec<String>,
    /// Remove the container when the command exits
    pub remove: bool,
}

impl ContainerSpec {
    /// Build the fixed test invocation for a workspace.
    ///
    /// The workspace is mounted read-write at the identical path inside
    /// the container, so paths in test output stay valid on the host.
    pub fn for_workspace(config: &ContainerConfig, workspace: &Path) -> Self {
        Self {
            image: config.image.clone(),
            user: config.user.clone(),
            mounts: vec![
                BindMount::read_write(workspace, workspace),
                BindMount::read_only(PASSWD_FILE, PASSWD_FILE),
            ],
            command: config.command.clone(),
            remove: true,
        }
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
