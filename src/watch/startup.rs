// src/watch/startup.rs

use std::path::Path;

use tracing::debug;

use crate::errors::{PollwatchError, Result};
use crate::fs::FileSystem;
use crate::watch::entity::{TrackedDir, TrackedFile, WatchSet};
use crate::watch::membership::resync;

/// Resolve the watch targets into the initial [`WatchSet`].
///
/// Each target is stat'ed and made absolute; directories are listed right
/// away so their children are tracked from the first pass. Registration order
/// follows `targets`.
pub fn resolve_watch_set<P: AsRef<Path>>(fs: &dyn FileSystem, targets: &[P]) -> Result<WatchSet> {
    let mut set = WatchSet::default();

    for target in targets {
        let target = target.as_ref();
        let resolution_error = |source| PollwatchError::PathResolution {
            path: target.to_path_buf(),
            source,
        };

        let stat = fs.stat(target).map_err(resolution_error)?;
        let path = fs.absolute(target).map_err(resolution_error)?;

        if stat.is_dir {
            let children = resync(fs, &path)?;
            debug!(?path, children = children.len(), "watching directory");
            set.dirs.push(TrackedDir::new(path, stat.modified, children));
        } else {
            debug!(?path, "watching file");
            set.files.push(TrackedFile::new(path, stat.modified));
        }
    }

    Ok(set)
}
