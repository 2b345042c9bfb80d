//! # canopy-service
//!
//! In-memory stores behind the notification bell and the admin activity
//! table. Both are thin wrappers over one generic [`EventLog`] that keeps
//! records most-recent-first.
//!
//! Stores are plain objects with a defined lifecycle. Construct them at
//! session start and share them as `Arc` handles; every operation is
//! synchronous and total.

pub mod activity;
pub mod log;
pub mod notification;

pub use activity::{ActivityExporter, ActivityLogStore, ExportFormat};
pub use log::{EventLog, RecordStats};
pub use notification::{NotificationStore, Toast};
