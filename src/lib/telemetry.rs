//! Telemetry initialization and launch span helpers.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a server launch.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
    launch_id: Uuid,
}

impl LaunchSpan {
    /// Start a launch span.
    pub fn start(launch_id: Uuid) -> Self {
        let span = info_span!(
            target: "lantern::launch",
            "server_launch",
            %launch_id
        );
        Self {
            span,
            started_at: Instant::now(),
            launch_id,
        }
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "lantern::launch",
            launch_id = %self.launch_id,
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Completed server launch"
        );
    }
}

/// Payload for logging the resolved launch as structured telemetry.
#[derive(Debug, Serialize)]
pub struct LaunchTelemetry<'a> {
    pub app_path: &'a str,
    pub dev: bool,
    pub show: bool,
    pub port: Option<&'a str>,
    pub allow_websocket_origin: Option<&'a str>,
    pub leftover_args: usize,
    pub argv: &'a [String],
}

/// Emit the launch mode to `tracing`.
pub fn emit_launch_mode(telemetry: &LaunchTelemetry<'_>) {
    info!(
        target: "lantern::launch",
        app_path = telemetry.app_path,
        dev = telemetry.dev,
        show = telemetry.show,
        port = telemetry.port.unwrap_or(""),
        allow_websocket_origin = telemetry.allow_websocket_origin.unwrap_or(""),
        leftover_args = telemetry.leftover_args,
        argv = ?telemetry.argv,
        "Handing off to bootstrap program"
    );
}
