use std::fs;
use std::path::PathBuf;

use pollwatch::cli::CliArgs;
use pollwatch::config::{load_and_validate, load_from_path};
use pollwatch::errors::PollwatchError;
use pollwatch_test_utils::builders::RunConfigBuilder;
use tempfile::tempdir;

const SAMPLE: &str = r#"
interval = 5
exec = "bash -c"
watch = ["src", "/etc/hosts"]
command = "cargo test"
"#;

#[test]
fn file_supplies_everything() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pollwatch.toml");
    fs::write(&path, SAMPLE).unwrap();

    let args = CliArgs {
        config: Some(path),
        ..CliArgs::default()
    };
    let cfg = load_and_validate(&args).unwrap();

    assert_eq!(cfg.interval_secs(), 5);
    assert_eq!(cfg.exec(), "bash -c");
    assert_eq!(cfg.command(), "cargo test");
    assert_eq!(
        cfg.watch(),
        &[dir.path().join("src"), PathBuf::from("/etc/hosts")]
    );
}

#[test]
fn command_line_wins_over_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pollwatch.toml");
    fs::write(&path, SAMPLE).unwrap();

    let args = CliArgs {
        config: Some(path),
        interval: Some(0),
        args: vec!["lib".to_string(), "make".to_string()],
        ..CliArgs::default()
    };
    let cfg = load_and_validate(&args).unwrap();

    assert_eq!(cfg.interval_secs(), 0);
    assert_eq!(cfg.exec(), "bash -c");
    assert_eq!(cfg.command(), "make");
    assert_eq!(cfg.watch(), &[PathBuf::from("lib")]);
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pollwatch.toml");
    fs::write(&path, "intervall = 3\n").unwrap();

    assert!(matches!(
        load_from_path(&path),
        Err(PollwatchError::TomlError(_))
    ));
}

#[test]
fn builder_matches_cli_defaults() {
    let built = RunConfigBuilder::new("make").watch("src").build();

    let args = CliArgs {
        args: vec!["src".to_string(), "make".to_string()],
        ..CliArgs::default()
    };
    assert_eq!(load_and_validate(&args).unwrap(), built);
}
