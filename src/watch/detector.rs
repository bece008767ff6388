// src/watch/detector.rs

use tracing::trace;

use crate::errors::{PollwatchError, Result};
use crate::fs::{FileStat, FileSystem};
use crate::watch::entity::Tracked;

/// Re-stat `entity` and report whether its modification time differs from
/// the stored one.
///
/// Any difference counts, including a timestamp that moved backwards. The
/// fresh metadata is returned either way; the entity itself is not touched.
pub fn check_modified<T>(fs: &dyn FileSystem, entity: &T) -> Result<(bool, FileStat)>
where
    T: Tracked + ?Sized,
{
    let path = entity.path();
    let stat = fs.stat(path).map_err(|source| PollwatchError::Stat {
        path: path.to_path_buf(),
        source,
    })?;

    let changed = stat.modified != entity.modified();
    trace!(?path, changed, "checked");
    Ok((changed, stat))
}
