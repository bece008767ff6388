// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! The loop talks to a `CommandRunner` instead of spawning processes itself,
//! so tests can swap in a fake that only records firings.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

use super::command::Invocation;
use super::runner::run_captured;

/// Trait abstracting one execution of the configured command.
pub trait CommandRunner: Send {
    /// Run the command to completion and return its combined output.
    fn fire(&mut self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>>;
}

/// Production runner: spawns the prepared [`Invocation`] each time.
#[derive(Debug)]
pub struct ShellRunner {
    invocation: Invocation,
    buffer: String,
}

impl ShellRunner {
    pub fn new(invocation: Invocation) -> Self {
        Self {
            invocation,
            buffer: String::new(),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn fire(&mut self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        Box::pin(async move {
            run_captured(&self.invocation, &mut self.buffer).await?;
            Ok(self.buffer.clone())
        })
    }
}
