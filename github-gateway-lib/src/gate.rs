use crate::error::{GitHubClientError, GitHubClientResult};
use anyhow::anyhow;
use log::debug;
use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// FIFO admission gate bounding how many tasks run at once. Waiters are
/// admitted in arrival order and a slot is released only when its task
/// finishes. There is no queue limit, timeout or cancellation: an admitted
/// task keeps running even if the caller stops waiting for it.
#[derive(Clone, Debug)]
pub struct ConcurrencyGate {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

impl ConcurrencyGate {
    pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(2) {
        Some(n) => n,
        None => unreachable!(),
    };

    pub fn new(capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of admitted tasks that have not finished yet
    pub fn in_flight(&self) -> usize {
        self.capacity - self.semaphore.available_permits()
    }

    /// Waits for a slot, then runs `task` on its own tokio task holding that
    /// slot. Dropping the returned future before admission leaves the queue;
    /// dropping it afterwards detaches from the task without stopping it.
    pub async fn run<F, T>(&self, task: F) -> GitHubClientResult<T>
    where
        F: Future<Output = GitHubClientResult<T>> + Send + 'static,
        T: Send + 'static,
    {
        if self.semaphore.available_permits() == 0 {
            debug!(
                "admission gate full ({} in flight), waiting for a slot",
                self.in_flight()
            );
        }

        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))?;
        debug!(
            "admitted task ({}/{} in flight)",
            self.in_flight(),
            self.capacity
        );

        tokio::spawn(async move {
            let _permit = permit;
            task.await
        })
        .await
        .map_err(|e| GitHubClientError::Other(anyhow!(e)))?
    }
}

impl Default for ConcurrencyGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
