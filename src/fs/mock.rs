// src/fs/mock.rs

//! In-memory filesystem with controllable modification times.
//!
//! Timestamps come from a logical clock: every mutation advances it by one
//! second, so two mutations never share a timestamp. Creating or removing an
//! entry also bumps the parent directory, as a real filesystem does.

use super::{FileStat, FileSystem};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File { modified: SystemTime },
    Dir { modified: SystemTime, children: Vec<String> },
}

impl MockEntry {
    fn modified(&self) -> SystemTime {
        match self {
            MockEntry::File { modified } | MockEntry::Dir { modified, .. } => *modified,
        }
    }

    fn set_modified(&mut self, time: SystemTime) {
        match self {
            MockEntry::File { modified } | MockEntry::Dir { modified, .. } => *modified = time,
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    entries: HashMap<PathBuf, MockEntry>,
    clock: u64,
}

impl MockState {
    fn tick(&mut self) -> SystemTime {
        self.clock += 1;
        SystemTime::UNIX_EPOCH + Duration::from_secs(self.clock)
    }

    fn ensure_dir(&mut self, path: &Path) {
        if self.entries.contains_key(path) {
            return;
        }
        let now = self.tick();
        self.entries.insert(
            path.to_path_buf(),
            MockEntry::Dir {
                modified: now,
                children: Vec::new(),
            },
        );
        self.link_into_parent(path);
    }

    /// Register `path` under its parent, creating the parent if needed.
    fn link_into_parent(&mut self, path: &Path) {
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return;
        };
        self.ensure_dir(parent);
        let name = name.to_string_lossy().into_owned();
        let now = self.tick();
        if let Some(MockEntry::Dir { modified, children }) = self.entries.get_mut(parent) {
            if !children.contains(&name) {
                children.push(name);
                *modified = now;
            }
        }
    }
}

/// Cheaply clonable handle; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) a file, creating parent directories implicitly.
    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut state = self.state.lock().unwrap();
        let now = state.tick();
        state
            .entries
            .insert(path.to_path_buf(), MockEntry::File { modified: now });
        state.link_into_parent(path);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        state.ensure_dir(path.as_ref());
    }

    /// Advance the modification time of an existing entry.
    ///
    /// For directories this only touches the directory itself, not its
    /// membership.
    pub fn touch(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        let now = state.tick();
        if let Some(entry) = state.entries.get_mut(path.as_ref()) {
            entry.set_modified(now);
        }
    }

    /// Set an explicit modification time (e.g. to move it backwards).
    pub fn set_modified(&self, path: impl AsRef<Path>, time: SystemTime) {
        let mut state = self.state.lock().unwrap();
        if let Some(entry) = state.entries.get_mut(path.as_ref()) {
            entry.set_modified(time);
        }
    }

    pub fn modified(&self, path: impl AsRef<Path>) -> Option<SystemTime> {
        let state = self.state.lock().unwrap();
        state.entries.get(path.as_ref()).map(MockEntry::modified)
    }

    /// Remove an entry (and anything below it) and bump its parent.
    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut state = self.state.lock().unwrap();
        state.entries.retain(|p, _| !p.starts_with(path));

        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return;
        };
        let name = name.to_string_lossy();
        let now = state.tick();
        if let Some(MockEntry::Dir { modified, children }) = state.entries.get_mut(parent) {
            children.retain(|c| *c != name);
            *modified = now;
        }
    }
}

/// Relative lookups resolve against the root, the mock's working directory.
fn rooted(path: &Path) -> PathBuf {
    Path::new("/").join(path)
}

impl FileSystem for MockFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let state = self.state.lock().unwrap();
        match state.entries.get(&rooted(path)) {
            Some(MockEntry::File { modified }) => Ok(FileStat {
                modified: *modified,
                is_dir: false,
            }),
            Some(MockEntry::Dir { modified, .. }) => Ok(FileStat {
                modified: *modified,
                is_dir: true,
            }),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {path:?}"),
            )),
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let state = self.state.lock().unwrap();
        match state.entries.get(&rooted(path)) {
            Some(MockEntry::Dir { children, .. }) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            Some(MockEntry::File { .. }) => Err(io::Error::other(format!(
                "not a directory: {path:?}"
            ))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {path:?}"),
            )),
        }
    }

    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        Ok(rooted(path))
    }
}
