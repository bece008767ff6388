// src/exec/runner.rs

//! Run one invocation to completion, capturing its output.

use std::io::{self, Read};

use tracing::{debug, info};

use crate::errors::{CommandError, Result};
use crate::exec::command::Invocation;

/// Spawn `invocation`, wait for it to exit and return its combined output.
///
/// stdout and stderr share the write end of a single pipe, so the captured
/// bytes keep the exact order in which the child wrote them. `buffer` is
/// cleared first. A launch failure or a non-zero exit is an error; for the
/// latter the captured output travels in [`CommandError::Exit`].
pub async fn run_captured(invocation: &Invocation, buffer: &mut String) -> Result<()> {
    buffer.clear();

    info!(cmd = %invocation, "running command");

    let (mut reader, writer) = io::pipe()?;
    let mut cmd = invocation.to_command();
    cmd.stdout(writer.try_clone()?).stderr(writer);

    let spawned = cmd.spawn();
    // The command still holds our copies of the write end; EOF only arrives
    // once they are closed.
    drop(cmd);
    let mut child = spawned.map_err(|source| CommandError::Launch {
        program: invocation.program().to_string(),
        source,
    })?;

    let bytes = tokio::task::spawn_blocking(move || {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map(|_| bytes)
    })
    .await
    .map_err(io::Error::other)??;
    buffer.push_str(&String::from_utf8_lossy(&bytes));

    let status = child.wait().await?;
    debug!(%status, bytes = buffer.len(), "command exited");

    if !status.success() {
        return Err(CommandError::Exit {
            status,
            output: buffer.clone(),
        }
        .into());
    }
    Ok(())
}
