//! Generic most-recent-first event log and derived aggregates.

pub mod event_log;
pub mod stats;

pub use event_log::EventLog;
pub use stats::RecordStats;
