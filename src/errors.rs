// src/errors.rs

//! Crate-wide error type.
//!
//! Every variant is fatal: nothing in the crate retries or recovers, errors
//! are propagated with `?` up to `main`, which reports them and exits.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollwatchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A watch target given at startup could not be stat'ed or made absolute.
    #[error("cannot resolve watch target {path:?}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A previously valid watched path can no longer be stat'ed.
    #[error("cannot stat {path:?}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory {path:?}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Failure of a single command execution.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The command ran but did not exit successfully. `output` holds the
    /// combined stdout/stderr captured before it exited.
    #[error("command exited with {status}")]
    Exit { status: ExitStatus, output: String },
}

pub type Result<T> = std::result::Result<T, PollwatchError>;
