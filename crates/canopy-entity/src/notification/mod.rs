//! User-facing notification records.

pub mod category;
pub mod model;

pub use category::NotificationCategory;
pub use model::Notification;
