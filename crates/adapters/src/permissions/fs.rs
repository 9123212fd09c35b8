// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem permission reset

use super::{PermissionError, PermissionReset};
use async_trait::async_trait;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Recursive mode reset via std::fs
#[derive(Clone, Default)]
pub struct FsPermissionReset;

impl FsPermissionReset {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PermissionReset for FsPermissionReset {
    async fn open_all(&self, path: &Path) -> Result<(), PermissionError> {
        open_all_sync(path)
    }
}

fn open_all_sync(path: &Path) -> Result<(), PermissionError> {
    let io = |source: std::io::Error| PermissionError::Io {
        path: path.display().to_string(),
        source,
    };

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o777)).map_err(io)?;

    // Recurse into real directories only; symlinked directories are not
    // followed, so a link out of the workspace cannot widen anything
    // outside it.
    let metadata = std::fs::symlink_metadata(path).map_err(io)?;
    if metadata.is_dir() {
        for entry in std::fs::read_dir(path).map_err(io)? {
            let entry = entry.map_err(io)?;
            open_all_sync(&entry.path())?;
        }
    }

    Ok(())
}
