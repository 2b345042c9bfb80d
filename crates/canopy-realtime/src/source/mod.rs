//! Pluggable producers of incoming notifications.

pub mod channel;
pub mod demo;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use canopy_entity::actor::Actor;
use canopy_entity::notification::NotificationCategory;

pub use channel::ChannelSource;
pub use demo::DemoSource;

/// A notification produced outside the store, not yet assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingNotification {
    /// Notification category.
    #[serde(rename = "type")]
    pub category: NotificationCategory,
    /// Display text.
    pub message: String,
    /// Who caused it.
    #[serde(default)]
    pub actor: Option<Actor>,
}

impl IncomingNotification {
    /// Create an incoming notification.
    pub fn new(
        category: NotificationCategory,
        message: impl Into<String>,
        actor: Option<Actor>,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            actor,
        }
    }
}

/// A stream of notifications feeding a store.
///
/// Implementations must be cancel-safe: the runner may drop a pending
/// `next()` future on shutdown.
#[async_trait]
pub trait NotificationSource: Send + 'static {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Wait for the next notification. `None` means the source is exhausted.
    async fn next(&mut self) -> Option<IncomingNotification>;
}
