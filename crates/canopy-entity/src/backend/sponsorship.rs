//! Sponsorship (donation) record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use canopy_core::types::id::SponsorshipId;

/// Payment state of a sponsorship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsorshipStatus {
    /// Awaiting payment confirmation.
    Pending,
    /// Payment settled.
    Completed,
    /// Payment failed.
    Failed,
}

/// How the donor paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit or debit card.
    Card,
    /// PayPal.
    Paypal,
    /// Bank transfer.
    BankTransfer,
}

/// A donation towards tree planting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Sponsorship {
    /// Sponsorship identifier.
    pub id: SponsorshipId,
    /// Amount in major currency units.
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    /// ISO 4217 currency code.
    #[validate(length(equal = 3))]
    pub currency: String,
    /// Donor display name.
    #[validate(length(min = 1, max = 120))]
    pub donor_name: String,
    /// Donor email address.
    #[validate(email)]
    pub donor_email: String,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Payment state.
    pub status: SponsorshipStatus,
    /// When the sponsorship was created.
    pub created_at: DateTime<Utc>,
}

impl Sponsorship {
    /// Whether the payment has settled.
    pub fn is_completed(&self) -> bool {
        self.status == SponsorshipStatus::Completed
    }
}
