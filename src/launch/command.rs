//! Translate parsed launcher options into the `bokeh serve` command vector.

use std::path::Path;

use crate::cli::ServeArgs;

/// Program that bootstraps the visualization server.
pub const BOOTSTRAP_PROGRAM: &str = "bokeh";
/// Bootstrap subcommand that serves the application.
pub const SERVE_SUBCOMMAND: &str = "serve";
/// Separator preceding tokens forwarded to the application itself.
pub const APP_ARGS_SEPARATOR: &str = "--args";

/// Build the `bokeh serve` invocation for the application at `app_path`.
///
/// Token order is fixed: prefix, `--dev`, `--show`, `--port`,
/// `--allow-websocket-origin`, then the `--args` tail. The bootstrap tooling
/// is positional-sensitive, so the order must not change.
pub fn build_serve_command(
    app_path: &Path,
    serve: &ServeArgs,
    leftover: &[String],
) -> Vec<String> {
    let mut argv = vec![
        BOOTSTRAP_PROGRAM.to_string(),
        SERVE_SUBCOMMAND.to_string(),
        app_path.display().to_string(),
    ];
    if serve.dev {
        argv.push("--dev".to_string());
    }
    if serve.show {
        argv.push("--show".to_string());
    }
    if let Some(port) = &serve.port {
        argv.push("--port".to_string());
        argv.push(port.clone());
    }
    if let Some(origin) = &serve.allow_websocket_origin {
        argv.push("--allow-websocket-origin".to_string());
        argv.push(origin.clone());
    }
    if !leftover.is_empty() {
        argv.push(APP_ARGS_SEPARATOR.to_string());
        argv.extend(leftover.iter().cloned());
    }
    argv
}
