// src/watch/scan.rs

//! Priority-ordered scans used by each stage of a pass.
//!
//! Every scan walks its entities in order and stops at the first one whose
//! timestamp changed; nothing after it is stat'ed.

use crate::errors::Result;
use crate::fs::{FileStat, FileSystem};
use crate::watch::detector::check_modified;
use crate::watch::entity::{Tracked, TrackedDir};

/// First changed entity of a flat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub index: usize,
    pub stat: FileStat,
}

/// First changed child across a list of directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildHit {
    pub dir: usize,
    pub child: usize,
    pub stat: FileStat,
}

pub fn first_modified<T: Tracked>(fs: &dyn FileSystem, entities: &[T]) -> Result<Option<Hit>> {
    for (index, entity) in entities.iter().enumerate() {
        let (changed, stat) = check_modified(fs, entity)?;
        if changed {
            return Ok(Some(Hit { index, stat }));
        }
    }
    Ok(None)
}

pub fn first_modified_child(fs: &dyn FileSystem, dirs: &[TrackedDir]) -> Result<Option<ChildHit>> {
    for (dir, tracked) in dirs.iter().enumerate() {
        if let Some(hit) = first_modified(fs, tracked.children())? {
            return Ok(Some(ChildHit {
                dir,
                child: hit.index,
                stat: hit.stat,
            }));
        }
    }
    Ok(None)
}
