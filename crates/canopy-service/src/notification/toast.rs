//! Ephemeral alerts raised when a notification is added.

use chrono::{DateTime, Utc};
use serde::Serialize;

use canopy_core::types::id::NotificationId;
use canopy_entity::notification::{Notification, NotificationCategory};

/// A transient pop-up alert. Presentation only, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    /// The notification this toast announces.
    pub notification_id: NotificationId,
    /// Notification category.
    pub category: NotificationCategory,
    /// Alert headline derived from the category.
    pub title: &'static str,
    /// Message text.
    pub message: String,
    /// Actor display name, if any.
    pub actor: Option<String>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Toast {
    /// Headline shown above the message for each category.
    pub fn title_for(category: NotificationCategory) -> &'static str {
        match category {
            NotificationCategory::Signup => "New Member",
            NotificationCategory::Login => "Sign-in",
            NotificationCategory::Tree => "Tree Planted",
            NotificationCategory::Profile => "Profile Updated",
            NotificationCategory::Comment => "New Comment",
        }
    }
}

impl From<&Notification> for Toast {
    fn from(n: &Notification) -> Self {
        Self {
            notification_id: n.id(),
            category: n.category(),
            title: Self::title_for(n.category()),
            message: n.message().to_string(),
            actor: n.actor().map(|a| a.name.clone()),
            created_at: n.timestamp(),
        }
    }
}
