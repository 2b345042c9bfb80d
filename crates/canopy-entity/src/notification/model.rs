//! Notification record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use canopy_core::types::id::NotificationId;

use crate::actor::Actor;
use crate::record::EventRecord;

use super::category::NotificationCategory;

/// A user-facing notification.
///
/// Everything except the read flag is fixed at creation, and the read
/// flag only ever moves from unread to read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    #[serde(rename = "type")]
    category: NotificationCategory,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    actor: Option<Actor>,
    timestamp: DateTime<Utc>,
    read: bool,
}

impl Notification {
    /// Create an unread notification stamped with the current time.
    pub fn new(
        category: NotificationCategory,
        message: impl Into<String>,
        actor: Option<Actor>,
    ) -> Self {
        Self::at(category, message, actor, Utc::now())
    }

    /// Create an unread notification with an explicit timestamp.
    pub fn at(
        category: NotificationCategory,
        message: impl Into<String>,
        actor: Option<Actor>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            category,
            message: message.into(),
            actor,
            timestamp,
            read: false,
        }
    }

    /// Consume and return the notification already marked read.
    pub fn into_read(mut self) -> Self {
        self.read = true;
        self
    }

    /// Notification identifier.
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Notification category.
    pub fn category(&self) -> NotificationCategory {
        self.category
    }

    /// Message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Associated user, if any.
    pub fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    /// Creation time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Whether the notification has been read.
    pub fn is_read(&self) -> bool {
        self.read
    }

    /// Whether the notification is still unread.
    pub fn is_unread(&self) -> bool {
        !self.read
    }

    /// Mark as read. Returns `true` if the flag changed.
    pub fn mark_read(&mut self) -> bool {
        !std::mem::replace(&mut self.read, true)
    }
}

impl EventRecord for Notification {
    type Id = NotificationId;
    type Category = NotificationCategory;

    fn id(&self) -> NotificationId {
        self.id
    }

    fn category(&self) -> NotificationCategory {
        self.category
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unread() {
        let n = Notification::new(
            NotificationCategory::Tree,
            "Emma planted an Oak tree",
            Some(Actor::named("Emma")),
        );
        assert!(n.is_unread());
        assert_eq!(n.actor().map(|a| a.name.as_str()), Some("Emma"));
    }

    #[test]
    fn test_mark_read_reports_transition_once() {
        let mut n = Notification::new(NotificationCategory::Login, "Welcome back", None);
        assert!(n.mark_read());
        assert!(!n.mark_read());
        assert!(n.is_read());
    }

    #[test]
    fn test_serialized_shape() {
        let n = Notification::new(NotificationCategory::Signup, "Liam joined", None);
        let json = serde_json::to_value(&n).expect("serialize");
        assert_eq!(json["type"], "signup");
        assert_eq!(json["read"], false);
        assert!(json.get("actor").is_none());
    }
}
