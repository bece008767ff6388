// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Polling interval used when neither the command line nor the config file
/// sets one.
pub const DEFAULT_INTERVAL_SECS: u64 = 1;

/// Optional config file, passed with `--config`.
///
/// ```toml
/// interval = 2
/// exec = "bash -c"
/// watch = ["src", "Cargo.toml"]
/// command = "cargo test"
/// ```
///
/// Every key is optional; values given on the command line win. Relative
/// `watch` entries are resolved against the directory holding the file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub interval: Option<u64>,
    pub exec: Option<String>,
    #[serde(default)]
    pub watch: Vec<PathBuf>,
    pub command: Option<String>,
}

/// Command line and config file merged, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRunConfig {
    pub interval: Option<u64>,
    pub exec: Option<String>,
    pub watch: Vec<PathBuf>,
    pub command: Option<String>,
}

/// Validated run configuration; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    interval_secs: u64,
    exec: String,
    watch: Vec<PathBuf>,
    command: String,
}

impl RunConfig {
    /// Construct without validation; callers go through `TryFrom<RawRunConfig>`.
    pub(crate) fn new_unchecked(
        interval_secs: u64,
        exec: String,
        watch: Vec<PathBuf>,
        command: String,
    ) -> Self {
        Self {
            interval_secs,
            exec,
            watch,
            command,
        }
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Executable spec, e.g. `sh -c`.
    pub fn exec(&self) -> &str {
        &self.exec
    }

    /// Watch targets in registration order, as given (not yet resolved).
    pub fn watch(&self) -> &[PathBuf] {
        &self.watch
    }

    /// Shell fragment run on every trigger.
    pub fn command(&self) -> &str {
        &self.command
    }
}
