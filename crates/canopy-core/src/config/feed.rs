//! Notification feed, generator, and activity log configuration.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Notification store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NotificationsConfig {
    /// Seed the store with the fixed demo notifications on start.
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
    /// Capacity of the toast broadcast channel.
    #[serde(default = "default_toast_buffer")]
    #[validate(range(min = 1))]
    pub toast_buffer_size: usize,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            toast_buffer_size: default_toast_buffer(),
        }
    }
}

/// Synthetic notification generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeneratorConfig {
    /// Whether the generator is mounted with the feed session.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Seconds between generator ticks.
    #[serde(default = "default_interval")]
    #[validate(range(min = 1))]
    pub interval_seconds: u64,
    /// Probability that a tick produces a notification.
    #[serde(default = "default_probability")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: default_interval(),
            probability: default_probability(),
        }
    }
}

/// Admin activity log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ActivityConfig {
    /// Seed the log with the fixed demo activities on start.
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
    /// Field delimiter used by delimited-text exports.
    #[serde(default = "default_delimiter")]
    #[validate(custom(function = "validate_delimiter"))]
    pub export_delimiter: char,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            export_delimiter: default_delimiter(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_toast_buffer() -> usize {
    64
}

fn default_interval() -> u64 {
    30
}

fn default_probability() -> f64 {
    0.3
}

fn default_delimiter() -> char {
    ','
}

/// Quotes and line breaks are reserved by the delimited export format.
fn validate_delimiter(delimiter: &char) -> Result<(), ValidationError> {
    match delimiter {
        '"' | '\r' | '\n' => {
            let mut err = ValidationError::new("reserved_delimiter");
            err.message = Some(format!("{delimiter:?} cannot be used as an export delimiter").into());
            Err(err)
        }
        _ => Ok(()),
    }
}
