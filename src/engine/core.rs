// src/engine/core.rs

//! Pure pass state machine.
//!
//! `WatchCore` owns the watch set and a filesystem handle. Each call to
//! [`WatchCore::pass`] runs the three stages in order:
//!
//! 1. top-level files
//! 2. top-level directories (their own timestamp; a change triggers a resync)
//! 3. directory children
//!
//! The first change found is recorded and returned; later stages and later
//! entities of the same stage are not checked in that pass. There are no
//! channels, processes or timers here.

use std::sync::Arc;

use tracing::debug;

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::watch::{first_modified, first_modified_child, resync, Tracked, WatchSet};

use super::{Change, PassOutcome, Stage};

#[derive(Debug)]
pub struct WatchCore {
    fs: Arc<dyn FileSystem>,
    set: WatchSet,
}

impl WatchCore {
    pub fn new(fs: Arc<dyn FileSystem>, set: WatchSet) -> Self {
        Self { fs, set }
    }

    pub fn watch_set(&self) -> &WatchSet {
        &self.set
    }

    /// Run one pass, recording (and returning) at most one change.
    pub fn pass(&mut self) -> Result<PassOutcome> {
        let fs = &*self.fs;

        if let Some(hit) = first_modified(fs, &self.set.files)? {
            let file = &mut self.set.files[hit.index];
            file.record(hit.stat);
            return Ok(changed(Stage::Files, &*file));
        }

        if let Some(hit) = first_modified(fs, &self.set.dirs)? {
            let dir = &mut self.set.dirs[hit.index];
            dir.record(hit.stat);
            let children = resync(fs, dir.path())?;
            dir.replace_children(children);
            return Ok(changed(Stage::Dirs, &*dir));
        }

        if let Some(hit) = first_modified_child(fs, &self.set.dirs)? {
            let child = &mut self.set.dirs[hit.dir].children_mut()[hit.child];
            child.record(hit.stat);
            return Ok(changed(Stage::DirContents, &*child));
        }

        Ok(PassOutcome::Idle)
    }
}

fn changed<T: Tracked>(stage: Stage, entity: &T) -> PassOutcome {
    debug!(%stage, path = ?entity.path(), "change detected");
    PassOutcome::Changed(Change {
        stage,
        path: entity.path().to_path_buf(),
    })
}
