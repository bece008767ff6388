// src/config/mod.rs

//! Run configuration.
//!
//! Responsibilities:
//! - Define the optional TOML file model and the merged run config
//!   (`model.rs`).
//! - Load the file and merge it with the command line (`loader.rs`).
//! - Validate the merged result (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, merge};
pub use model::{FileConfig, RawRunConfig, RunConfig, DEFAULT_INTERVAL_SECS};
