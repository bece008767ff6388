// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] turns the exec spec and shell fragment into an
//!   [`Invocation`].
//! - [`runner`] runs an invocation to completion with combined output
//!   capture.
//! - [`backend`] provides the `CommandRunner` trait and the production
//!   `ShellRunner`, which tests can replace with a fake implementation.

pub mod backend;
pub mod command;
pub mod runner;

pub use backend::{CommandRunner, ShellRunner};
pub use command::{Invocation, DEFAULT_EXEC};
pub use runner::run_captured;
