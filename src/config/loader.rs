// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::{FileConfig, RawRunConfig, RunConfig};
use crate::errors::Result;

/// Load a config file from a given path.
///
/// This only performs TOML deserialization; it does **not** check that the
/// result is runnable. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<FileConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: FileConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Merge a config file with the command line.
///
/// Scalars from the command line replace the file's. Positional watch targets,
/// when given, replace the file's `watch` list as a whole. Relative file
/// entries are joined onto `base_dir`.
pub fn merge(file: FileConfig, base_dir: &Path, args: &CliArgs) -> RawRunConfig {
    let (cli_command, cli_watch) = args.split_positionals();

    let watch = if cli_watch.is_empty() {
        file.watch
            .into_iter()
            .map(|p| if p.is_relative() { base_dir.join(p) } else { p })
            .collect()
    } else {
        cli_watch
    };

    RawRunConfig {
        interval: args.interval.or(file.interval),
        exec: args.exec.clone().or(file.exec),
        watch,
        command: cli_command.or(file.command),
    }
}

/// Build the validated [`RunConfig`] for a command line.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads the `--config` file, if any.
/// - Merges it with the command line.
/// - Applies defaults and checks the result (see `validate.rs`).
pub fn load_and_validate(args: &CliArgs) -> Result<RunConfig> {
    let raw = match &args.config {
        Some(path) => {
            debug!(?path, "loading config file");
            let file = load_from_path(path)?;
            let base_dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            merge(file, base_dir, args)
        }
        None => merge(FileConfig::default(), Path::new("."), args),
    };

    RunConfig::try_from(raw)
}
