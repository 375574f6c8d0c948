use assert_cmd::Command;

pub const APP_PATH: &str = "/srv/lantern/app";

/// Launcher command with the bootstrap program redirected to `echo`, so the
/// serve command line handed off by the launcher is observable on stdout.
pub fn launcher() -> Command {
    let mut cmd = Command::cargo_bin("lantern").expect("lantern binary should build");
    cmd.env("LANTERN_BOOTSTRAP", "echo");
    cmd.env("LANTERN_APP_PATH", APP_PATH);
    cmd.env_remove("RUST_LOG");
    cmd
}
