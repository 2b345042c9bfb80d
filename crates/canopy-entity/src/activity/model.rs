//! Activity log record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use canopy_core::types::id::ActivityId;

use crate::record::EventRecord;

use super::category::ActivityCategory;

/// An entry of the administrative audit trail. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    id: ActivityId,
    #[serde(rename = "type")]
    category: ActivityCategory,
    action: String,
    user: String,
    details: String,
    timestamp: DateTime<Utc>,
}

impl Activity {
    /// Create an activity stamped with the current time.
    pub fn new(
        category: ActivityCategory,
        action: impl Into<String>,
        user: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::at(category, action, user, details, Utc::now())
    }

    /// Create an activity with an explicit timestamp.
    pub fn at(
        category: ActivityCategory,
        action: impl Into<String>,
        user: impl Into<String>,
        details: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ActivityId::new(),
            category,
            action: action.into(),
            user: user.into(),
            details: details.into(),
            timestamp,
        }
    }

    /// Activity identifier.
    pub fn id(&self) -> ActivityId {
        self.id
    }

    /// Activity category.
    pub fn category(&self) -> ActivityCategory {
        self.category
    }

    /// Short action label, e.g. "Tree Planted".
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Display name of the acting user.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Free-text details.
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Creation time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl EventRecord for Activity {
    type Id = ActivityId;
    type Category = ActivityCategory;

    fn id(&self) -> ActivityId {
        self.id
    }

    fn category(&self) -> ActivityCategory {
        self.category
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
