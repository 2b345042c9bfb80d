//! Convenience result type alias for Canopy.

use crate::error::AppError;

/// A specialized `Result` type for fallible Canopy operations.
pub type AppResult<T> = Result<T, AppError>;
