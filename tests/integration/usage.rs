use predicates::prelude::*;

use crate::common::launcher;

#[test]
fn empty_invocation_exits_with_a_usage_error() {
    launcher()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("specify input FILES"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn serve_flags_without_input_are_still_a_usage_error() {
    launcher()
        .args(["--dev", "--port", "5006"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--config-file"));
}

#[test]
fn dangling_port_is_a_parse_error() {
    launcher()
        .args(["a.yaml", "--port"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--port"));
}

#[test]
fn help_renders_on_stdout_and_exits_cleanly() {
    launcher()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--allow-websocket-origin"))
        .stdout(predicate::str::contains("--config-file"));
}

#[test]
fn version_renders_on_stdout_and_exits_cleanly() {
    launcher()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lantern"));
}

#[test]
fn missing_bootstrap_program_is_reported_on_stderr() {
    launcher()
        .env("LANTERN_BOOTSTRAP", "/nonexistent/no-such-bootstrap")
        .arg("a.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to start bootstrap program"));
}
