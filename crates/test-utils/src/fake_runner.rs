use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pollwatch::errors::{CommandError, Result};
use pollwatch::exec::CommandRunner;

/// A fake runner that:
/// - counts firings instead of spawning processes
/// - returns `"run <n>\n"` as the captured output
/// - optionally fails with a launch error on a given firing.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    fired: Arc<AtomicUsize>,
    fail_on: Option<usize>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `n`th firing (1-based).
    pub fn failing_on(n: usize) -> Self {
        Self {
            fail_on: Some(n),
            ..Self::default()
        }
    }

    /// Shared counter; stays valid after the runner moves into a runtime.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.fired)
    }
}

impl CommandRunner for FakeRunner {
    fn fire(&mut self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        let n = self.fired.fetch_add(1, Ordering::SeqCst) + 1;
        let fail = self.fail_on == Some(n);

        Box::pin(async move {
            if fail {
                return Err(CommandError::Launch {
                    program: "fake".to_string(),
                    source: io::Error::other("configured to fail"),
                }
                .into());
            }
            Ok(format!("run {n}\n"))
        })
    }
}
