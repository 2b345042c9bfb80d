//! # canopy-realtime
//!
//! Everything that writes to the stores without a direct user call:
//!
//! - **Sources**: producers of incoming notifications. [`DemoSource`] is the
//!   timer-driven synthetic generator; [`ChannelSource`] stands in for a
//!   server push channel.
//! - **Runner**: drives one source into a [`NotificationStore`] on a
//!   background task with watch-based cancellation.
//! - **Bridge**: maps domain events and backend records to notification
//!   and activity log entries.
//! - **Session**: owns both stores and every mounted source for the
//!   lifetime of one client session.
//!
//! [`NotificationStore`]: canopy_service::NotificationStore

pub mod bridge;
pub mod formatter;
pub mod runner;
pub mod session;
pub mod source;

pub use bridge::EventBridge;
pub use runner::{SourceHandle, SourceRunner};
pub use session::FeedSession;
pub use source::{ChannelSource, DemoSource, IncomingNotification, NotificationSource};
