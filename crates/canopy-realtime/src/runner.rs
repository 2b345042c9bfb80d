//! Source runner: drives a notification source into a store.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use canopy_core::error::AppError;
use canopy_core::result::AppResult;
use canopy_service::NotificationStore;

use crate::source::NotificationSource;

/// Pulls from one source and adds everything it yields to the store.
#[derive(Debug)]
pub struct SourceRunner<S> {
    /// Producer being drained.
    source: S,
    /// Destination store.
    store: Arc<NotificationStore>,
}

impl<S: NotificationSource> SourceRunner<S> {
    /// Create a runner for `source`.
    pub fn new(source: S, store: Arc<NotificationStore>) -> Self {
        Self { source, store }
    }

    /// Run until the cancel signal is raised or the source is exhausted.
    ///
    /// Returns the number of notifications delivered.
    pub async fn run(mut self, mut cancel: watch::Receiver<bool>) -> usize {
        let name = self.source.name().to_string();
        info!(source = %name, "Notification source started");

        let mut delivered = 0usize;

        if !*cancel.borrow_and_update() {
            loop {
                tokio::select! {
                    biased;
                    changed = cancel.changed() => {
                        if changed.is_err() || *cancel.borrow() {
                            debug!(source = %name, "Notification source received shutdown signal");
                            break;
                        }
                    }
                    next = self.source.next() => match next {
                        Some(incoming) => {
                            self.store.add_notification(
                                incoming.category,
                                incoming.message,
                                incoming.actor,
                            );
                            delivered += 1;
                        }
                        None => {
                            debug!(source = %name, "Notification source exhausted");
                            break;
                        }
                    },
                }
            }
        }

        info!(source = %name, delivered, "Notification source stopped");
        delivered
    }

    /// Spawn the runner on the current runtime.
    pub fn spawn(self) -> SourceHandle {
        let name = self.source.name().to_string();
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let task = tokio::spawn(self.run(cancel_rx));

        SourceHandle {
            name,
            cancel_tx,
            task: Some(task),
        }
    }
}

/// Owner of a spawned runner.
///
/// Dropping the handle without calling [`SourceHandle::shutdown`] still
/// cancels the task, so no notification is added after teardown.
#[derive(Debug)]
pub struct SourceHandle {
    name: String,
    cancel_tx: watch::Sender<bool>,
    task: Option<JoinHandle<usize>>,
}

impl SourceHandle {
    /// Name of the mounted source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the runner task has finished.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Signal the runner to stop and wait for it.
    ///
    /// Returns the number of notifications the source delivered.
    pub async fn shutdown(mut self) -> AppResult<usize> {
        let _ = self.cancel_tx.send(true);

        let Some(task) = self.task.take() else {
            return Ok(0);
        };

        task.await.map_err(|e| {
            warn!(source = %self.name, error = %e, "Notification source task failed");
            AppError::internal(format!("Notification source '{}' failed: {e}", self.name))
        })
    }
}

impl Drop for SourceHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = self.cancel_tx.send(true);
            task.abort();
        }
    }
}
