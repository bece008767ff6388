#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use pollwatch::config::{RawRunConfig, RunConfig};
use pollwatch::engine::WatchCore;
use pollwatch::fs::mock::MockFileSystem;
use pollwatch::watch::resolve_watch_set;

/// Builder for `RunConfig` to simplify test setup.
pub struct RunConfigBuilder {
    raw: RawRunConfig,
}

impl RunConfigBuilder {
    pub fn new(command: &str) -> Self {
        Self {
            raw: RawRunConfig {
                command: Some(command.to_string()),
                ..RawRunConfig::default()
            },
        }
    }

    pub fn watch(mut self, path: impl Into<PathBuf>) -> Self {
        self.raw.watch.push(path.into());
        self
    }

    pub fn interval(mut self, secs: u64) -> Self {
        self.raw.interval = Some(secs);
        self
    }

    pub fn exec(mut self, exec: &str) -> Self {
        self.raw.exec = Some(exec.to_string());
        self
    }

    pub fn build(self) -> RunConfig {
        RunConfig::try_from(self.raw).expect("Failed to build valid config from builder")
    }
}

/// Builder for a mock filesystem tree plus the targets to watch in it.
#[derive(Default)]
pub struct MockTreeBuilder {
    fs: MockFileSystem,
    targets: Vec<PathBuf>,
}

impl MockTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file that exists but is not itself a watch target.
    pub fn file(self, path: &str) -> Self {
        self.fs.add_file(path);
        self
    }

    /// Add a file and register it as a watch target.
    pub fn watched_file(mut self, path: &str) -> Self {
        self.fs.add_file(path);
        self.targets.push(PathBuf::from(path));
        self
    }

    /// Add a directory with the given children and register it as a target.
    pub fn watched_dir(mut self, path: &str, children: &[&str]) -> Self {
        self.fs.add_dir(path);
        for child in children {
            self.fs.add_file(PathBuf::from(path).join(child));
        }
        self.targets.push(PathBuf::from(path));
        self
    }

    /// Resolve the targets and return the core along with a handle to mutate
    /// the filesystem behind it.
    pub fn build(self) -> (MockFileSystem, WatchCore) {
        let set = resolve_watch_set(&self.fs, &self.targets)
            .expect("Failed to resolve mock watch set");
        let core = WatchCore::new(Arc::new(self.fs.clone()), set);
        (self.fs, core)
    }
}
