//! Serve-command construction and bootstrap handoff.
mod bootstrap;
mod command;

pub use bootstrap::{run_bootstrap, LauncherExit};
pub use command::{
    build_serve_command, APP_ARGS_SEPARATOR, BOOTSTRAP_PROGRAM, SERVE_SUBCOMMAND,
};
