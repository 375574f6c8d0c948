//! CLI argument definitions for the launcher grammar.
use std::path::PathBuf;

use clap::{Args, Parser};

/// Command-line arguments accepted by the launcher.
///
/// This is the combined grammar: launcher-domain options plus the serve
/// options forwarded to the visualization server. The tolerant pass in
/// [`super::parse`] decides which raw tokens reach this parser.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lantern",
    author,
    version,
    about = "Launch the Lantern visualization server",
    long_about = None
)]
pub struct LauncherArgs {
    /// Input files to display; required unless --config-file is given.
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,
    /// Read the application set-up from a config file instead of FILES.
    #[arg(long = "config-file", value_name = "PATH")]
    pub config_file: Option<PathBuf>,
    #[command(flatten)]
    pub serve: ServeArgs,
}

/// Options forwarded verbatim to `bokeh serve`.
#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Run the server in development mode.
    #[arg(long)]
    pub dev: bool,
    /// Port to listen on.
    #[arg(long, value_name = "PORT")]
    pub port: Option<String>,
    /// Launch a browser once the server is up.
    #[arg(long)]
    pub show: bool,
    /// Public hostnames that may connect to the websocket.
    #[arg(long = "allow-websocket-origin", value_name = "HOST[:PORT]")]
    pub allow_websocket_origin: Option<String>,
}
