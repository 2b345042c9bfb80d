//! Feed session that ties together both stores and their producers.

use std::sync::Arc;

use tracing::{info, warn};

use canopy_core::config::AppConfig;
use canopy_core::result::AppResult;
use canopy_service::{ActivityLogStore, NotificationStore};

use crate::bridge::EventBridge;
use crate::runner::{SourceHandle, SourceRunner};
use crate::source::{DemoSource, NotificationSource};

/// One client session: both stores, the bridge, and every mounted source.
///
/// Sources are mounted on the current Tokio runtime and torn down by
/// [`FeedSession::shutdown`]. Dropping the session aborts them instead.
#[derive(Debug)]
pub struct FeedSession {
    /// Notification feed.
    notifications: Arc<NotificationStore>,
    /// Admin activity log.
    activity: Arc<ActivityLogStore>,
    /// Domain event bridge.
    bridge: EventBridge,
    /// Mounted sources.
    sources: Vec<SourceHandle>,
}

impl FeedSession {
    /// Build both stores from configuration and mount the demo generator
    /// when enabled. Must be called from within a Tokio runtime.
    pub fn start(config: &AppConfig) -> Self {
        let notifications = Arc::new(NotificationStore::new(&config.notifications));
        let activity = Arc::new(ActivityLogStore::new(&config.activity));
        let bridge = EventBridge::new(notifications.clone(), activity.clone());

        let mut session = Self {
            notifications,
            activity,
            bridge,
            sources: Vec::new(),
        };

        if config.generator.enabled {
            session.mount(DemoSource::new(&config.generator));
        }

        info!(
            notifications = session.notifications.len(),
            unread = session.notifications.unread_count(),
            activities = session.activity.len(),
            sources = session.sources.len(),
            "Feed session started"
        );
        session
    }

    /// Mount an additional source feeding the notification store.
    pub fn mount<S: NotificationSource>(&mut self, source: S) {
        let handle = SourceRunner::new(source, self.notifications.clone()).spawn();
        self.sources.push(handle);
    }

    /// Notification store handle.
    pub fn notifications(&self) -> &Arc<NotificationStore> {
        &self.notifications
    }

    /// Activity log store handle.
    pub fn activity(&self) -> &Arc<ActivityLogStore> {
        &self.activity
    }

    /// Event bridge writing into this session's stores.
    pub fn bridge(&self) -> &EventBridge {
        &self.bridge
    }

    /// Names of the mounted sources.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(SourceHandle::name).collect()
    }

    /// Stop every source and wait for it to finish.
    ///
    /// Returns the total number of notifications the sources delivered.
    pub async fn shutdown(self) -> AppResult<usize> {
        info!("Shutting down feed session");

        let mut delivered = 0;
        let mut first_error = None;

        for handle in self.sources {
            match handle.shutdown().await {
                Ok(count) => delivered += count,
                Err(e) => {
                    warn!(error = %e, "Source did not shut down cleanly");
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        info!(delivered, "Feed session shut down");
        Ok(delivered)
    }
}
