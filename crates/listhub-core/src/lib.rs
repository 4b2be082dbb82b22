//! # listhub-core
//!
//! Core crate for Listhub. Contains configuration schemas, the blob
//! store trait, the pagination window type, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Listhub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
