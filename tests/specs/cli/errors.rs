//! CLI error specs
//!
//! Problems before the pipeline starts (missing or invalid
//! configuration) surface as a non-zero exit, unlike build failures.

use crate::prelude::*;

#[test]
fn run_without_a_config_file_fails() {
    let project = Project::empty();

    project
        .barge()
        .args(&["run"])
        .fails()
        .stderr_has("barge.toml");
}

#[test]
fn run_with_malformed_toml_fails() {
    let project = Project::empty();
    project.file("barge.toml", "[checkout\nurl = ");

    project
        .barge()
        .args(&["run"])
        .fails()
        .stderr_has("TOML parse error");
}

#[test]
fn run_with_an_invalid_config_fails() {
    let project = Project::empty();
    project.file(
        "barge.toml",
        r#"
[checkout]
url = ""

[container]
image = "acme/widget-ci:latest"
command = ["make", "test"]
"#,
    );

    project
        .barge()
        .args(&["run"])
        .fails()
        .stderr_has("invalid configuration");
}

#[test]
fn unknown_config_keys_are_rejected() {
    let project = Project::empty();
    project.file(
        "barge.toml",
        r#"
retries = 3

[checkout]
url = "https://github.com/acme/widget.git"

[container]
image = "acme/widget-ci:latest"
command = ["make", "test"]
"#,
    );

    project.barge().args(&["run"]).fails();
}
