// src/exec/command.rs

use std::fmt;
use std::process::Stdio;

use tokio::process::Command;

use crate::errors::{PollwatchError, Result};

/// Default executable spec: run the fragment through `sh -c`.
pub const DEFAULT_EXEC: &str = "sh -c";

/// A prepared invocation: `<program> <joined leading args> <fragment>`.
///
/// The leading arguments of the exec spec are passed as ONE argument, joined
/// with single spaces, e.g. `--exec "env FOO=1 BAR=2"` runs
/// `env "FOO=1 BAR=2" <fragment>`. A bare program still gets that argument,
/// empty: `--exec python3` runs `python3 "" <fragment>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    joined_args: String,
    fragment: String,
}

impl Invocation {
    /// Split `exec` on whitespace into a program and its leading arguments.
    pub fn from_spec(exec: &str, fragment: impl Into<String>) -> Result<Self> {
        let mut tokens = exec.split_whitespace();
        let program = tokens.next().ok_or_else(|| {
            PollwatchError::ConfigError("exec spec must name an executable".to_string())
        })?;
        let leading: Vec<&str> = tokens.collect();

        Ok(Self {
            program: program.to_string(),
            joined_args: leading.join(" "),
            fragment: fragment.into(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments exactly as handed to the program.
    pub fn args(&self) -> [&str; 2] {
        [self.joined_args.as_str(), self.fragment.as_str()]
    }

    /// Build a child process with stdin closed. The caller wires up
    /// stdout/stderr.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args())
            .stdin(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args() {
            write!(f, " {arg:?}")?;
        }
        Ok(())
    }
}
