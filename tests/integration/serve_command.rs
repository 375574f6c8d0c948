use predicates::prelude::*;

use crate::common::{launcher, APP_PATH};

#[test]
fn bare_launch_hands_off_the_prefix_only() {
    launcher()
        .arg("a.yaml")
        .assert()
        .success()
        .stdout(format!("serve {APP_PATH}\n"));
}

#[test]
fn serve_flags_are_forwarded_in_fixed_order() {
    launcher()
        .args([
            "a.yaml",
            "--show",
            "--dev",
            "--port",
            "5006",
            "--allow-websocket-origin",
            "example.com:80",
        ])
        .assert()
        .success()
        .stdout(format!(
            "serve {APP_PATH} --dev --show --port 5006 --allow-websocket-origin example.com:80\n"
        ));
}

#[test]
fn config_file_substitutes_for_files() {
    launcher()
        .args(["--config-file", "c.yaml", "--show"])
        .assert()
        .success()
        .stdout(format!("serve {APP_PATH} --show\n"));
}

#[test]
fn unrecognized_tokens_are_forwarded_after_the_args_separator() {
    launcher()
        .args(["a.yaml", "--palette", "viridis"])
        .assert()
        .success()
        .stdout(format!("serve {APP_PATH} --args --palette viridis\n"));
}

#[test]
fn inline_flag_values_are_forwarded_like_split_ones() {
    launcher()
        .args(["a.yaml", "--port=8080"])
        .assert()
        .success()
        .stdout(format!("serve {APP_PATH} --port 8080\n"));
}

#[test]
fn relative_app_path_override_is_joined_to_the_working_directory() {
    let workdir = tempfile::tempdir().expect("can create temporary directory");
    launcher()
        .env("LANTERN_APP_PATH", "bundle")
        .current_dir(workdir.path())
        .arg("a.yaml")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("serve "))
        .stdout(predicate::str::contains("/bundle"));
}
