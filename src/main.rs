//! Entry point for the Lantern launcher.
use std::{env, process::ExitCode};

use lantern::{
    cli::{self, LaunchProfile},
    launch::{self, LauncherExit},
    lib::telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, LauncherExit> {
    telemetry::init_tracing().map_err(LauncherExit::from_error)?;
    let raw: Vec<String> = env::args().skip(1).collect();
    let (args, leftover) = cli::parse(&raw).map_err(LauncherExit::from_cli_error)?;
    let profile = LaunchProfile::resolve().map_err(LauncherExit::from_error)?;
    launch::run_bootstrap(&profile, &args, &leftover).await
}
