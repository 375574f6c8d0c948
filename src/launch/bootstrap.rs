//! Bootstrap handoff: spawn the serve command and report process exit.

use std::{
    ffi::OsString,
    process::{ExitCode, ExitStatus},
};

use anyhow::Error;
use clap::{error::ErrorKind, CommandFactory};
use tokio::process::Command;
use uuid::Uuid;

use crate::{
    cli::{LaunchProfile, LauncherArgs},
    lib::{
        errors::{CliError, LaunchError},
        telemetry::{self, LaunchSpan, LaunchTelemetry},
    },
};

use super::command::build_serve_command;

const USAGE_EXIT_CODE: u8 = 2;

/// Bundles a launch failure with the exit code the process should report.
#[derive(Debug)]
pub struct LauncherExit {
    message: Option<String>,
    cli_error: Option<CliError>,
    exit_code: u8,
}

impl LauncherExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: Some(format!("{err:?}")),
            cli_error: None,
            exit_code: 1,
        }
    }

    /// Usage and parse errors exit 2; help and version render on stdout and
    /// exit 0.
    pub fn from_cli_error(err: CliError) -> Self {
        let exit_code = match &err {
            CliError::Parse(parse) if !parse.use_stderr() => 0,
            _ => USAGE_EXIT_CODE,
        };
        Self {
            message: None,
            cli_error: Some(err),
            exit_code,
        }
    }

    /// Print the failure the way it should appear to the user and hand back
    /// the exit code.
    pub fn report(self) -> ExitCode {
        match self.cli_error {
            Some(CliError::Parse(err)) => {
                let _ = err.print();
            }
            Some(err @ CliError::MissingInput) => {
                let rendered = LauncherArgs::command()
                    .error(ErrorKind::MissingRequiredArgument, err.to_string());
                let _ = rendered.print();
            }
            None => {
                if let Some(message) = self.message {
                    eprintln!("{message}");
                }
            }
        }
        ExitCode::from(self.exit_code)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

/// Build the serve command for the profile and hand it to the bootstrap
/// program, blocking until the server exits. The child's exit status becomes
/// the launcher's own exit code.
pub async fn run_bootstrap(
    profile: &LaunchProfile,
    args: &LauncherArgs,
    leftover: &[String],
) -> Result<ExitCode, LauncherExit> {
    let argv = build_serve_command(&profile.app_path, &args.serve, leftover);

    let app_path = profile.app_path.display().to_string();
    telemetry::emit_launch_mode(&LaunchTelemetry {
        app_path: &app_path,
        dev: args.serve.dev,
        show: args.serve.show,
        port: args.serve.port.as_deref(),
        allow_websocket_origin: args.serve.allow_websocket_origin.as_deref(),
        leftover_args: leftover.len(),
        argv: &argv,
    });

    let span = LaunchSpan::start(Uuid::new_v4());
    match invoke(profile, &argv).await {
        Ok(status) => {
            span.finish("exited", status.code());
            Ok(exit_from_status(status))
        }
        Err(err) => {
            span.finish("spawn_failed", None);
            Err(LauncherExit::from_error(err))
        }
    }
}

/// Spawn the first token of `argv` (or the profile's override) with the
/// remaining tokens as its arguments and wait for it to finish.
async fn invoke(profile: &LaunchProfile, argv: &[String]) -> Result<ExitStatus, LaunchError> {
    let (first, rest) = argv.split_first().ok_or(LaunchError::EmptyCommand)?;
    let program = profile
        .bootstrap_override
        .as_ref()
        .map(|path| path.as_os_str().to_owned())
        .unwrap_or_else(|| OsString::from(first));

    let mut command = Command::new(&program);
    command.args(rest);
    command.kill_on_drop(true);
    command.status().await.map_err(|source| LaunchError::Spawn {
        program: program.to_string_lossy().into_owned(),
        source,
    })
}

fn exit_from_status(status: ExitStatus) -> ExitCode {
    match status.code() {
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        None => ExitCode::FAILURE,
    }
}
