//! Notification store, toasts, and demo seed data.

pub mod seed;
pub mod store;
pub mod toast;

pub use store::NotificationStore;
pub use toast::Toast;
