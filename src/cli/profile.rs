//! LaunchProfile and application-path resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

const APP_PATH_ENV: &str = "LANTERN_APP_PATH";
const BOOTSTRAP_ENV: &str = "LANTERN_BOOTSTRAP";
const DEFAULT_APP_DIR: &str = "app";

/// Resolved launch profile.
///
/// Everything the command builder and the bootstrap handoff need, resolved
/// up front so neither has to read ambient process state.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub app_path: PathBuf,
    pub bootstrap_override: Option<PathBuf>,
}

impl LaunchProfile {
    pub fn resolve() -> Result<Self> {
        Ok(Self {
            app_path: resolve_app_path()?,
            bootstrap_override: resolve_bootstrap_override(),
        })
    }
}

/// Resolve the application root in the order: env override → bundled `app`
/// directory beside the executable.
pub fn resolve_app_path() -> Result<PathBuf> {
    if let Some(path) = env::var_os(APP_PATH_ENV).map(PathBuf::from) {
        if path.is_absolute() {
            return Ok(path);
        }
        let cwd = env::current_dir().context("failed to obtain current directory")?;
        return Ok(cwd.join(path));
    }

    let exe = env::current_exe().context("failed to locate current executable")?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(DEFAULT_APP_DIR))
}

/// Optional override for the bootstrap program, read from the environment.
pub fn resolve_bootstrap_override() -> Option<PathBuf> {
    env::var_os(BOOTSTRAP_ENV).map(PathBuf::from)
}
