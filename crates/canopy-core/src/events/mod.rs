//! Domain events raised by the rest of the application.
//!
//! Sibling components (account pages, the tree registration form, the
//! donation flow, the admin back-office) report what happened as a
//! [`DomainEvent`]. The realtime bridge turns these into notification
//! and activity log entries.

pub mod admin;
pub mod planting;
pub mod user;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use admin::AdminEvent;
pub use planting::PlantingEvent;
pub use user::UserEvent;

use crate::types::id::UserId;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who caused the event (if known).
    pub actor_id: Option<UserId>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// Account and community events.
    User(UserEvent),
    /// Tree planting and sponsorship events.
    Planting(PlantingEvent),
    /// Back-office events.
    Admin(AdminEvent),
}

impl DomainEvent {
    /// Create a new domain event stamped with the current time.
    pub fn new(actor_id: Option<UserId>, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor_id,
            payload,
        }
    }

    /// Short dotted name of the event, used in logs.
    pub fn kind(&self) -> &'static str {
        match &self.payload {
            EventPayload::User(e) => e.kind(),
            EventPayload::Planting(e) => e.kind(),
            EventPayload::Admin(e) => e.kind(),
        }
    }
}

impl From<UserEvent> for EventPayload {
    fn from(event: UserEvent) -> Self {
        Self::User(event)
    }
}

impl From<PlantingEvent> for EventPayload {
    fn from(event: PlantingEvent) -> Self {
        Self::Planting(event)
    }
}

impl From<AdminEvent> for EventPayload {
    fn from(event: AdminEvent) -> Self {
        Self::Admin(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_tagging() {
        let event = DomainEvent::new(
            None,
            UserEvent::SignedUp {
                name: "Emma".to_string(),
                avatar: None,
            }
            .into(),
        );
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["payload"]["domain"], "User");
        assert_eq!(json["payload"]["event"]["type"], "SignedUp");
        assert_eq!(event.kind(), "user.signed_up");
    }
}
