//! # canopy-entity
//!
//! Record models for Canopy. The two event record variants
//! ([`Notification`] and [`Activity`]) share the [`EventRecord`] trait so
//! a single generic log can hold either. The `backend` module mirrors the
//! shapes the hosted backend hands to the application.

pub mod activity;
pub mod actor;
pub mod backend;
pub mod notification;
pub mod record;

pub use activity::{Activity, ActivityCategory};
pub use actor::Actor;
pub use notification::{Notification, NotificationCategory};
pub use record::{EventRecord, RecordCategory};
