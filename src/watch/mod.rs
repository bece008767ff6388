// src/watch/mod.rs

//! Polling change detection.
//!
//! This module is responsible for:
//! - Modelling the tracked files and directories (`entity`).
//! - Deciding whether a single entity changed (`detector`).
//! - Refreshing a directory's cached child list (`membership`).
//! - The short-circuiting, priority-ordered scans used by each stage of a
//!   pass (`scan`).
//! - Turning the startup targets into the initial watch set (`startup`).
//!
//! It does **not** sleep or run commands; the loop in `engine` drives it.

pub mod detector;
pub mod entity;
pub mod membership;
pub mod scan;
pub mod startup;

pub use detector::check_modified;
pub use entity::{Tracked, TrackedDir, TrackedFile, WatchSet};
pub use membership::resync;
pub use scan::{first_modified, first_modified_child, ChildHit, Hit};
pub use startup::resolve_watch_set;
