// src/watch/membership.rs

use std::path::Path;

use tracing::debug;

use crate::errors::{PollwatchError, Result};
use crate::fs::FileSystem;
use crate::watch::entity::TrackedFile;

/// Build a fresh child list for the directory at `dir`.
///
/// Only immediate entries are listed; subdirectories become opaque
/// [`TrackedFile`]s. Each child is seeded with the timestamp read here, so a
/// newly discovered file is not reported as modified on the next check.
/// Entries are sorted by path to keep the order stable.
pub fn resync(fs: &dyn FileSystem, dir: &Path) -> Result<Vec<TrackedFile>> {
    let mut entries = fs
        .read_dir(dir)
        .map_err(|source| PollwatchError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
    entries.sort();

    let children = entries
        .into_iter()
        .map(|path| -> Result<TrackedFile> {
            let stat = fs.stat(&path).map_err(|source| PollwatchError::Stat {
                path: path.clone(),
                source,
            })?;
            Ok(TrackedFile::new(path, stat.modified))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(?dir, children = children.len(), "resynced directory membership");
    Ok(children)
}
