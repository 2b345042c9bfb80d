//! Registered tree record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use canopy_core::types::id::{TreeId, UserId};

/// A tree a user registered on their dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Tree {
    /// Tree identifier.
    pub id: TreeId,
    /// Owning user.
    pub owner_id: UserId,
    /// Species name.
    #[validate(length(min = 1, max = 120))]
    pub species: String,
    /// Human-readable planting location.
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    /// Date the tree went into the ground.
    pub planted_on: NaiveDate,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional photo URL.
    #[serde(default)]
    #[validate(url)]
    pub image_url: Option<String>,
    /// Optional GPS position.
    #[serde(default)]
    #[validate(nested)]
    pub coordinates: Option<Coordinates>,
}

/// WGS84 position of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinates {
    /// Latitude in degrees.
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    /// Longitude in degrees.
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}
