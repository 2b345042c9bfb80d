//! # canopy-core
//!
//! Core crate for Canopy. Contains configuration schemas, typed
//! identifiers, domain events raised by the rest of the application,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Canopy crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
