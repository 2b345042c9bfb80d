//! Tree planting and sponsorship events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Events raised by the planting dashboard and the donation flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlantingEvent {
    /// A user registered a planted tree.
    TreeRegistered {
        /// Display name of the planter.
        planter: String,
        /// Planter avatar URL.
        avatar: Option<String>,
        /// Tree species.
        species: String,
        /// Where the tree was planted.
        location: String,
        /// Planting date.
        planted_on: NaiveDate,
    },
    /// A sponsorship payment settled.
    DonationReceived {
        /// Donor display name.
        donor: String,
        /// Amount in major currency units.
        amount: f64,
        /// ISO 4217 currency code.
        currency: String,
    },
}

impl PlantingEvent {
    /// Short dotted event name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TreeRegistered { .. } => "planting.tree_registered",
            Self::DonationReceived { .. } => "planting.donation_received",
        }
    }
}
