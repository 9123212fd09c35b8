// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline configuration
//!
//! Loaded from `barge.toml`. The image, source URL and in-container
//! command are per-project and required; everything else defaults to the
//! pipeline's fixed constants.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Where the source tree comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckoutConfig {
    /// Clone URL or local path
    pub url: String,
    #[serde(default = "default_branch")]
    pub branch: String,
}

fn default_branch() -> String {
    "main".to_string()
}

/// The containerized test command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerConfig {
    /// Container runtime executable
    #[serde(default = "default_runtime")]
    pub runtime: String,
    pub image: String,
    /// Non-root user the test command runs as
    #[serde(default = "default_user")]
    pub user: String,
    /// Command executed inside the container
    pub command: Vec<String>,
}

fn default_runtime() -> String {
    "docker".to_string()
}

fn default_user() -> String {
    "ci".to_string()
}

/// The coverage upload command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverageConfig {
    #[serde(default = "default_coverage_command")]
    pub command: Vec<String>,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            command: default_coverage_command(),
        }
    }
}

fn default_coverage_command() -> Vec<String> {
    vec!["codecov".to_string()]
}

/// Configuration for one pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Working directory holding the checked-out source tree for one run
    #[serde(default = "default_workspace")]
    pub workspace: PathBuf,
    pub checkout: CheckoutConfig,
    pub container: ContainerConfig,
    #[serde(default)]
    pub coverage: CoverageConfig,
}

fn default_workspace() -> PathBuf {
    PathBuf::from("workspace")
}

impl PipelineConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: PipelineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.checkout.url.is_empty() {
            return Err(ConfigError::Invalid("checkout.url must not be empty".to_string()));
        }
        if self.container.image.is_empty() {
            return Err(ConfigError::Invalid("container.image must not be empty".to_string()));
        }
        if self.container.command.is_empty() {
            return Err(ConfigError::Invalid(
                "container.command must not be empty".to_string(),
            ));
        }
        if self.coverage.command.is_empty() {
            return Err(ConfigError::Invalid(
                "coverage.command must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
