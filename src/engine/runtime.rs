// src/engine/runtime.rs

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use tracing::{debug, info};

use crate::errors::{CommandError, PollwatchError, Result};
use crate::exec::CommandRunner;

use super::core::WatchCore;
use super::PassOutcome;

/// Drives [`WatchCore`] forever, firing the command through a
/// [`CommandRunner`] on every detected change.
///
/// This is the IO shell around the core: it prints command output to stdout
/// and sleeps between idle passes. It is strictly sequential; a running
/// command blocks change detection until it exits.
pub struct Runtime<R: CommandRunner> {
    core: WatchCore,
    runner: R,
    interval: Duration,
    fired: u64,
}

impl<R: CommandRunner> fmt::Debug for Runtime<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .field("interval", &self.interval)
            .field("fired", &self.fired)
            .finish_non_exhaustive()
    }
}

impl<R: CommandRunner> Runtime<R> {
    pub fn new(core: WatchCore, runner: R, interval: Duration) -> Self {
        Self {
            core,
            runner,
            interval,
            fired: 0,
        }
    }

    pub fn core(&self) -> &WatchCore {
        &self.core
    }

    /// Number of completed command executions so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Main loop: fire once unconditionally, then poll forever.
    ///
    /// Only returns on error.
    pub async fn run(mut self) -> Result<()> {
        info!(
            paths = self.core.watch_set().tracked_paths(),
            interval = ?self.interval,
            "pollwatch started"
        );

        self.fire().await?;
        loop {
            self.tick().await?;
        }
    }

    /// One loop iteration: a pass, followed by a firing on change or a sleep
    /// when idle.
    pub async fn tick(&mut self) -> Result<PassOutcome> {
        let outcome = self.core.pass()?;
        match &outcome {
            PassOutcome::Changed(change) => {
                info!(stage = %change.stage, path = ?change.path, "change detected; re-running command");
                self.fire().await?;
            }
            PassOutcome::Idle => {
                debug!(interval = ?self.interval, "no changes; sleeping");
                tokio::time::sleep(self.interval).await;
            }
        }
        Ok(outcome)
    }

    /// Run the command once and print whatever it wrote.
    pub async fn fire(&mut self) -> Result<()> {
        match self.runner.fire().await {
            Ok(output) => {
                self.fired += 1;
                emit(&mut io::stdout(), &output)
            }
            Err(PollwatchError::Command(CommandError::Exit { status, output })) => {
                emit(&mut io::stdout(), &output)?;
                Err(CommandError::Exit { status, output }.into())
            }
            Err(err) => Err(err),
        }
    }
}

/// Write the captured output followed by a newline.
fn emit<W: Write>(out: &mut W, output: &str) -> Result<()> {
    writeln!(out, "{output}")?;
    out.flush()?;
    Ok(())
}
