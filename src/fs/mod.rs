// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub mod mock;

/// The subset of file metadata the watcher cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub modified: SystemTime,
    pub is_dir: bool,
}

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    /// Read metadata for `path`, following symlinks.
    fn stat(&self, path: &Path) -> io::Result<FileStat>;

    /// Return the entries of a directory (not recursive).
    /// Returns full paths.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Make `path` absolute against the current directory without resolving
    /// symlinks.
    fn absolute(&self, path: &Path) -> io::Result<PathBuf>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let meta = fs::metadata(path)?;
        Ok(FileStat {
            modified: meta.modified()?,
            is_dir: meta.is_dir(),
        })
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            entries.push(entry.path());
        }
        Ok(entries)
    }

    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        std::path::absolute(path)
    }
}
