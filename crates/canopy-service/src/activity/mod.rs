//! Admin activity log store, export, and demo seed data.

pub mod export;
pub mod seed;
pub mod store;

pub use export::{ActivityExporter, ExportFormat};
pub use store::{ActivityLogStore, ActivityStats};
