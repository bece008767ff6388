// src/engine/mod.rs

//! The re-trigger loop.
//!
//! The pure, synchronous pass logic lives in [`core`]: it polls the watch set
//! in priority order and reports at most one change per pass. The async shell
//! in [`runtime`] fires the command on every change and sleeps between idle
//! passes.

use std::fmt;
use std::path::PathBuf;

/// Stage of a pass in which a change was detected, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Top-level files, in registration order.
    Files,
    /// Top-level directories' own timestamps (membership changes).
    Dirs,
    /// Children of the watched directories.
    DirContents,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Files => "files",
            Stage::Dirs => "dirs",
            Stage::DirContents => "dir-contents",
        };
        f.write_str(name)
    }
}

/// The single change a pass acted upon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub stage: Stage,
    pub path: PathBuf,
}

/// Result of one full pass over the watch set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// A change was found and recorded; the command should fire and the next
    /// pass should start immediately.
    Changed(Change),
    /// Nothing changed; the loop should sleep for the interval.
    Idle,
}

impl PassOutcome {
    pub fn is_idle(&self) -> bool {
        matches!(self, PassOutcome::Idle)
    }
}

pub mod core;
pub mod runtime;

pub use self::core::WatchCore;
pub use self::runtime::Runtime;
