//! Administrative activity log records.

pub mod category;
pub mod model;

pub use category::ActivityCategory;
pub use model::Activity;
