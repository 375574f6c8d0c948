//! CLI entrypoint module structure.

pub mod args;
pub mod parse;
pub mod profile;

pub use args::{LauncherArgs, ServeArgs};
pub use parse::parse;
pub use profile::{resolve_app_path, resolve_bootstrap_override, LaunchProfile};
