// src/watch/entity.rs

//! Snapshot entities: the files and directories under watch.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::fs::FileStat;

/// Anything the watcher polls: it has a fixed absolute path and remembers the
/// modification time seen by the last check.
pub trait Tracked {
    fn path(&self) -> &Path;

    fn modified(&self) -> SystemTime;

    /// Store freshly read metadata as the new last-known state.
    fn record(&mut self, stat: FileStat);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    path: PathBuf,
    modified: SystemTime,
}

impl TrackedFile {
    pub fn new(path: impl Into<PathBuf>, modified: SystemTime) -> Self {
        Self {
            path: path.into(),
            modified,
        }
    }
}

impl Tracked for TrackedFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn modified(&self) -> SystemTime {
        self.modified
    }

    fn record(&mut self, stat: FileStat) {
        self.modified = stat.modified;
    }
}

/// A watched directory together with a cached, non-recursive listing of its
/// children. The listing is only refreshed by [`TrackedDir::replace_children`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedDir {
    path: PathBuf,
    modified: SystemTime,
    children: Vec<TrackedFile>,
}

impl TrackedDir {
    pub fn new(path: impl Into<PathBuf>, modified: SystemTime, children: Vec<TrackedFile>) -> Self {
        Self {
            path: path.into(),
            modified,
            children,
        }
    }

    pub fn children(&self) -> &[TrackedFile] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [TrackedFile] {
        &mut self.children
    }

    pub fn replace_children(&mut self, children: Vec<TrackedFile>) {
        self.children = children;
    }
}

impl Tracked for TrackedDir {
    fn path(&self) -> &Path {
        &self.path
    }

    fn modified(&self) -> SystemTime {
        self.modified
    }

    fn record(&mut self, stat: FileStat) {
        self.modified = stat.modified;
    }
}

/// Everything under watch, in registration order.
///
/// Owned exclusively by the loop that polls it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchSet {
    pub files: Vec<TrackedFile>,
    pub dirs: Vec<TrackedDir>,
}

impl WatchSet {
    /// Total number of polled paths, directory children included.
    pub fn tracked_paths(&self) -> usize {
        self.files.len()
            + self
                .dirs
                .iter()
                .map(|d| 1 + d.children().len())
                .sum::<usize>()
    }
}
