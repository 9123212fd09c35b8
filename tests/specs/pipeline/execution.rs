//! Pipeline execution specs
//!
//! Drive the full checkout → test → coverage sequence against stub
//! collaborators and verify the reported build result, the stage
//! ordering and the workspace cleanup.

use crate::prelude::*;

const CONFIG: &str = r#"
[checkout]
url = "https://github.com/acme/widget.git"

[container]
image = "acme/widget-ci:latest"
command = ["make", "test"]

[coverage]
command = ["codecov"]
"#;

/// A project whose stub git populates the workspace
fn project() -> Project {
    let project = Project::empty();
    project.file("barge.toml", CONFIG);
    project.stub_bin("git", "mkdir -p workspace\necho \"print('ok')\" > workspace/app.py");
    project.stub_bin("docker", "exit 0");
    project.stub_bin("codecov", "exit 0");
    project
}

#[test]
fn passing_build_reports_success_and_uploads_coverage() {
    let project = project();

    project
        .barge()
        .args(&["run"])
        .passes()
        .stdout_has("build result: SUCCESS");

    let calls = project.calls();
    assert!(calls.contains("git clone"), "calls:\n{calls}");
    assert!(calls.contains("docker run"), "calls:\n{calls}");
    assert!(calls.contains("codecov"), "calls:\n{calls}");
}

#[test]
fn stages_run_in_checkout_test_coverage_order() {
    let project = project();
    project.barge().args(&["run"]).passes();

    let calls = project.calls();
    let git = calls.find("git").expect("git called");
    let docker = calls.find("docker").expect("docker called");
    let codecov = calls.find("codecov").expect("codecov called");
    assert!(git < docker && docker < codecov, "calls:\n{calls}");
}

#[test]
fn container_argv_carries_the_fixed_mounts_and_user() {
    let project = project();
    project.barge().args(&["run"]).passes();

    let calls = project.calls();
    let docker_line = calls
        .lines()
        .find(|line| line.starts_with("docker"))
        .expect("docker called");
    assert!(docker_line.contains("--rm"), "line: {docker_line}");
    assert!(
        docker_line.contains("/etc/passwd:/etc/passwd:ro"),
        "line: {docker_line}"
    );
    assert!(docker_line.contains("-u ci"), "line: {docker_line}");
    assert!(
        docker_line.contains("acme/widget-ci:latest make test"),
        "line: {docker_line}"
    );
}

#[test]
fn workspace_permissions_are_opened_after_a_passing_run() {
    use std::os::unix::fs::PermissionsExt;

    let project = project();
    project.barge().args(&["run"]).passes();

    let mode = std::fs::metadata(project.path().join("workspace/app.py"))
        .expect("workspace file exists")
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o777);
}

#[test]
fn failing_tests_report_failure_and_skip_coverage() {
    let project = Project::empty();
    project.file("barge.toml", CONFIG);
    project.stub_bin("git", "mkdir -p workspace");
    project.stub_bin("docker", "exit 1");
    project.stub_bin("codecov", "exit 0");

    // The process still exits cleanly; failure travels in the result line
    project
        .barge()
        .args(&["run"])
        .passes()
        .stdout_has("build result: FAILURE")
        .stderr_has("skipping coverage");

    let calls = project.calls();
    assert!(calls.contains("docker run"), "calls:\n{calls}");
    assert!(!calls.contains("codecov"), "calls:\n{calls}");
}

#[test]
fn permissions_are_opened_even_when_tests_fail() {
    use std::os::unix::fs::PermissionsExt;

    let project = Project::empty();
    project.file("barge.toml", CONFIG);
    project.stub_bin("git", "mkdir -p workspace\necho x > workspace/left-behind.txt");
    project.stub_bin("docker", "exit 1");
    project.stub_bin("codecov", "exit 0");

    project.barge().args(&["run"]).passes();

    let mode = std::fs::metadata(project.path().join("workspace/left-behind.txt"))
        .expect("workspace file exists")
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o777);
}

#[test]
fn checkout_failure_skips_the_container_entirely() {
    let project = Project::empty();
    project.file("barge.toml", CONFIG);
    project.stub_bin("git", "echo 'fatal: no route to host' >&2\nexit 128");
    project.stub_bin("docker", "exit 0");
    project.stub_bin("codecov", "exit 0");

    project
        .barge()
        .args(&["run"])
        .passes()
        .stdout_has("build result: FAILURE");

    let calls = project.calls();
    assert!(!calls.contains("docker"), "calls:\n{calls}");
    assert!(!calls.contains("codecov"), "calls:\n{calls}");
}

#[test]
fn coverage_failure_fails_the_build() {
    let project = Project::empty();
    project.file("barge.toml", CONFIG);
    project.stub_bin("git", "mkdir -p workspace");
    project.stub_bin("docker", "exit 0");
    project.stub_bin("codecov", "echo 'upload rejected' >&2\nexit 1");

    project
        .barge()
        .args(&["run"])
        .passes()
        .stdout_has("build result: FAILURE");
}

#[test]
fn json_format_prints_the_run_record() {
    let project = project();

    project
        .barge()
        .args(&["run", "--format", "json"])
        .passes()
        .stdout_has("\"status\": \"SUCCESS\"")
        .stdout_has("\"workspace\"");
}

#[test]
fn workspace_flag_overrides_the_configured_path() {
    let project = Project::empty();
    project.file("barge.toml", CONFIG);
    project.stub_bin("git", "mkdir -p elsewhere\necho x > elsewhere/app.py");
    project.stub_bin("docker", "exit 0");
    project.stub_bin("codecov", "exit 0");

    project
        .barge()
        .args(&["run", "--workspace", "elsewhere"])
        .passes()
        .stdout_has("build result: SUCCESS");

    let calls = project.calls();
    assert!(calls.contains("elsewhere"), "calls:\n{calls}");
}
