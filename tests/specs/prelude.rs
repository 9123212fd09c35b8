//! Shared harness for behavioral specs.
//!
//! Each spec gets a `Project`: a temp directory holding `barge.toml`, a
//! stub-binary dir prepended to PATH, and an invocation log the stubs
//! append to.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Output;

/// One spec's isolated project directory
pub struct Project {
    temp: tempfile::TempDir,
}

impl Project {
    /// Create an empty project with a stub-bin directory
    pub fn empty() -> Self {
        let temp = tempfile::TempDir::new().expect("create temp dir");
        fs::create_dir_all(temp.path().join(".stubs")).expect("create stub dir");
        Self { temp }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.temp.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(path, content).expect("write file");
    }

    /// Install an executable stub on the spec's PATH.
    ///
    /// Every stub appends its name and arguments to `calls.log` before
    /// running `script`.
    pub fn stub_bin(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let log = self.temp.path().join("calls.log");
        let body = format!(
            "#!/bin/sh\necho \"{name} $@\" >> \"{log}\"\n{script}\n",
            log = log.display(),
        );
        let path = self.temp.path().join(".stubs").join(name);
        fs::write(&path, body).expect("write stub");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod stub");
    }

    /// Recorded stub invocations, in order
    pub fn calls(&self) -> String {
        fs::read_to_string(self.temp.path().join("calls.log")).unwrap_or_default()
    }

    /// Run the barge binary in this project
    pub fn barge(&self) -> Barge {
        let stubs = self.temp.path().join(".stubs");
        let path = format!(
            "{}:{}",
            stubs.display(),
            std::env::var("PATH").unwrap_or_default()
        );
        let mut cmd = assert_cmd::Command::cargo_bin("barge").expect("binary builds");
        cmd.current_dir(self.temp.path()).env("PATH", path);
        Barge { cmd }
    }
}

pub struct Barge {
    cmd: assert_cmd::Command,
}

impl Barge {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Run and assert a zero exit code
    pub fn passes(mut self) -> RunResult {
        let output = self.cmd.output().expect("spawn barge");
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        RunResult { output }
    }

    /// Run and assert a non-zero exit code
    pub fn fails(mut self) -> RunResult {
        let output = self.cmd.output().expect("spawn barge");
        assert!(
            !output.status.success(),
            "expected failure, got success\nstdout: {}",
            String::from_utf8_lossy(&output.stdout),
        );
        RunResult { output }
    }
}

pub struct RunResult {
    output: Output,
}

impl RunResult {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout().contains(needle),
            "stdout missing {needle:?}:\n{}",
            self.stdout()
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr().contains(needle),
            "stderr missing {needle:?}:\n{}",
            self.stderr()
        );
        self
    }
}
