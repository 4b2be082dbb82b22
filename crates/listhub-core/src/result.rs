//! Convenience result type alias for Listhub.

use crate::error::AppError;

/// A specialized `Result` type for Listhub operations.
pub type AppResult<T> = Result<T, AppError>;
