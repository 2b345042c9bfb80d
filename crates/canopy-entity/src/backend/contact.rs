//! Contact form message record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use canopy_core::types::id::ContactMessageId;

/// Who is getting in touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    /// A private individual.
    Individual,
    /// A prospective volunteer.
    Volunteer,
    /// A corporate or group sponsor.
    Sponsor,
    /// A donor.
    Donor,
}

impl ContactType {
    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Volunteer => "volunteer",
            Self::Sponsor => "sponsor",
            Self::Donor => "donor",
        }
    }
}

/// Review state of a contact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    /// Not yet reviewed.
    Pending,
    /// Accepted by an administrator.
    Approved,
    /// Rejected by an administrator.
    Rejected,
}

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    /// Message identifier.
    pub id: ContactMessageId,
    /// Sender name.
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// Sender email address.
    #[validate(email)]
    pub email: String,
    /// Optional phone number.
    #[serde(default)]
    #[validate(length(min = 5, max = 32))]
    pub phone: Option<String>,
    /// Message body.
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
    /// Sender type.
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    /// Review state.
    pub status: ContactStatus,
    /// When the message was submitted.
    pub created_at: DateTime<Utc>,
}
