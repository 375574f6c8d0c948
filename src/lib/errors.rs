use std::io;

use thiserror::Error;

/// Errors produced while parsing and validating the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// The invocation named neither input files nor a config file.
    #[error("please specify input FILES or a --config-file path")]
    MissingInput,
    /// The combined grammar rejected the invocation.
    #[error(transparent)]
    Parse(#[from] clap::Error),
}

/// Errors produced while handing the serve command to the bootstrap program.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to start bootstrap program `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("bootstrap command vector is empty")]
    EmptyCommand,
}
