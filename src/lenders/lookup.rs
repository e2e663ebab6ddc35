//! Cancellable lender lookup task.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::{EngineError, EngineResult};
use crate::models::{Lender, LenderQuery};

use super::LenderDirectory;

/// A lender fetch running as a background tokio task.
///
/// The lookup starts as soon as it is spawned and runs independently of the
/// caller. It can be aborted at any point; joining an aborted lookup yields
/// [`EngineError::LookupCancelled`].
#[derive(Debug)]
pub struct LenderLookup {
    handle: JoinHandle<EngineResult<Vec<Lender>>>,
}

impl LenderLookup {
    /// Spawns a fetch of `query` against `directory`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<D: LenderDirectory>(directory: Arc<D>, query: LenderQuery) -> Self {
        let handle = tokio::spawn(async move { directory.fetch(&query).await });
        Self { handle }
    }

    /// Cancels the lookup.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Waits for the lookup to finish.
    pub async fn join(self) -> EngineResult<Vec<Lender>> {
        match self.handle.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(EngineError::LookupCancelled),
            Err(err) => Err(EngineError::LenderLookupFailed {
                location: "lookup task".to_string(),
                message: err.to_string(),
            }),
        }
    }

    /// Waits at most `timeout` for the lookup, aborting it if time runs out.
    pub async fn join_timeout(self, timeout: Duration) -> EngineResult<Vec<Lender>> {
        let abort = self.handle.abort_handle();
        match tokio::time::timeout(timeout, self.join()).await {
            Ok(result) => result,
            Err(_) => {
                abort.abort();
                Err(EngineError::LenderLookupFailed {
                    location: "lookup task".to_string(),
                    message: format!("timed out after {} ms", timeout.as_millis()),
                })
            }
        }
    }
}
