//! Back-office events.

use serde::{Deserialize, Serialize};

/// Events raised by the contact form and the admin back-office.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AdminEvent {
    /// A contact form message arrived.
    ContactReceived {
        /// Sender name.
        name: String,
        /// Contact type label (individual, volunteer, sponsor, donor).
        contact_type: String,
    },
    /// An administrator performed a back-office action.
    ActionTaken {
        /// Administrator display name.
        admin: String,
        /// Short action label, e.g. "Project Updated".
        action: String,
        /// Free-text details.
        details: String,
    },
}

impl AdminEvent {
    /// Short dotted event name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ContactReceived { .. } => "admin.contact_received",
            Self::ActionTaken { .. } => "admin.action_taken",
        }
    }
}
