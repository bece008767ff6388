// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod watch;

use std::io::{self, Write};
use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_and_validate, RunConfig};
use crate::engine::{Runtime, WatchCore};
use crate::errors::Result;
use crate::exec::{Invocation, ShellRunner};
use crate::fs::{FileSystem, RealFileSystem};
use crate::watch::{resolve_watch_set, Tracked, WatchSet};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (command line + optional TOML file)
/// - startup resolution of the watch set
/// - the command runner
/// - the polling loop
///
/// It only returns on `--dry-run` or on a fatal error.
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args)?;

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let watch_set = resolve_watch_set(&*fs, cfg.watch())?;
    let invocation = Invocation::from_spec(cfg.exec(), cfg.command())?;

    info!(
        files = watch_set.files.len(),
        dirs = watch_set.dirs.len(),
        cmd = %invocation,
        "resolved watch set"
    );

    if args.dry_run {
        let mut out = io::stdout();
        write_dry_run(&mut out, &cfg, &watch_set, &invocation)?;
        return Ok(());
    }

    let core = WatchCore::new(fs, watch_set);
    let runner = ShellRunner::new(invocation);
    Runtime::new(core, runner, cfg.interval()).run().await
}

/// Simple dry-run output: print what would be polled and run.
fn write_dry_run<W: Write>(
    out: &mut W,
    cfg: &RunConfig,
    set: &WatchSet,
    invocation: &Invocation,
) -> io::Result<()> {
    writeln!(out, "pollwatch dry-run")?;
    writeln!(out, "  interval = {}s", cfg.interval_secs())?;
    writeln!(out, "  command  = {invocation}")?;
    writeln!(out)?;

    writeln!(out, "files ({}):", set.files.len())?;
    for file in &set.files {
        writeln!(out, "  - {}", file.path().display())?;
    }

    writeln!(out, "dirs ({}):", set.dirs.len())?;
    for dir in &set.dirs {
        writeln!(out, "  - {}", dir.path().display())?;
        for child in dir.children() {
            writeln!(out, "      {}", child.path().display())?;
        }
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}
