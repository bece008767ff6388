// tests/integration/error_handling.rs

use std::path::PathBuf;

use pollwatch::cli::CliArgs;
use pollwatch::config::load_and_validate;
use pollwatch::errors::PollwatchError;
use pollwatch::fs::RealFileSystem;
use pollwatch::watch::resolve_watch_set;
use tempfile::tempdir;

fn cli(args: &[&str]) -> CliArgs {
    CliArgs {
        args: args.iter().map(|s| s.to_string()).collect(),
        ..CliArgs::default()
    }
}

#[test]
fn missing_watch_target_is_a_resolution_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let result = resolve_watch_set(&RealFileSystem, &[&missing]);

    match result {
        Err(PollwatchError::PathResolution { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        Err(e) => panic!("Expected PathResolution error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn command_without_targets_is_a_config_error() {
    let result = load_and_validate(&cli(&["make"]));

    match result {
        Err(PollwatchError::ConfigError(msg)) => assert!(msg.contains("watch")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn no_positionals_is_a_config_error() {
    let result = load_and_validate(&cli(&[]));
    assert!(matches!(result, Err(PollwatchError::ConfigError(_))));
}

#[test]
fn blank_exec_is_a_config_error() {
    let mut args = cli(&["src", "make"]);
    args.exec = Some(" ".to_string());

    assert!(matches!(
        load_and_validate(&args),
        Err(PollwatchError::ConfigError(_))
    ));
}

#[test]
fn unreadable_config_file_is_an_io_error() {
    let mut args = cli(&["src", "make"]);
    args.config = Some(PathBuf::from("/definitely/not/here/pollwatch.toml"));

    assert!(matches!(
        load_and_validate(&args),
        Err(PollwatchError::IoError(_))
    ));
}
