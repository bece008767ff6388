// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `pollwatch`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "pollwatch",
    version,
    about = "Re-run a shell command whenever watched files or directories change.",
    long_about = None
)]
pub struct CliArgs {
    /// Seconds to sleep between polls when nothing changed (default 1).
    #[arg(short, long, value_name = "SECONDS")]
    pub interval: Option<u64>,

    /// Executable used to run COMMAND, split on whitespace (default "sh -c").
    #[arg(short, long, value_name = "EXEC")]
    pub exec: Option<String>,

    /// Optional TOML file providing interval, exec, watch and command.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `POLLWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the watch set and invocation, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Files or directories to watch, followed by the command to run.
    #[arg(value_name = "PATH... COMMAND")]
    pub args: Vec<String>,
}

impl CliArgs {
    /// Split the positionals into the trailing command and the watch targets
    /// before it.
    pub fn split_positionals(&self) -> (Option<String>, Vec<PathBuf>) {
        match self.args.split_last() {
            Some((command, targets)) => (
                Some(command.clone()),
                targets.iter().map(PathBuf::from).collect(),
            ),
            None => (None, Vec::new()),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
