// src/config/validate.rs

use crate::config::model::{RawRunConfig, RunConfig, DEFAULT_INTERVAL_SECS};
use crate::errors::{PollwatchError, Result};
use crate::exec::DEFAULT_EXEC;

impl TryFrom<RawRunConfig> for RunConfig {
    type Error = PollwatchError;

    fn try_from(raw: RawRunConfig) -> std::result::Result<Self, Self::Error> {
        let exec = raw.exec.unwrap_or_else(|| DEFAULT_EXEC.to_string());
        validate_exec(&exec)?;

        let command = raw.command.ok_or_else(|| {
            PollwatchError::ConfigError("no command given to run on change".to_string())
        })?;

        if raw.watch.is_empty() {
            return Err(PollwatchError::ConfigError(
                "at least one file or directory to watch is required".to_string(),
            ));
        }

        Ok(RunConfig::new_unchecked(
            raw.interval.unwrap_or(DEFAULT_INTERVAL_SECS),
            exec,
            raw.watch,
            command,
        ))
    }
}

fn validate_exec(exec: &str) -> Result<()> {
    if exec.split_whitespace().next().is_none() {
        return Err(PollwatchError::ConfigError(format!(
            "exec spec {exec:?} does not name an executable"
        )));
    }
    Ok(())
}
