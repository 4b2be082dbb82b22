//! Listing ownership checks.
//!
//! A listing may be changed by anyone when it has no recorded owner, and
//! otherwise only by its owner.

use std::fmt;

use tracing::warn;

use listhub_core::error::AppError;

/// A mutating operation on a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingAction {
    Edit,
    Delete,
}

impl fmt::Display for ListingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edit => write!(f, "edit"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Allow `action` iff `owner_id` is `None` or equals `caller_id`.
pub fn ensure_can_modify(
    owner_id: Option<i64>,
    caller_id: i64,
    action: ListingAction,
) -> Result<(), AppError> {
    match owner_id {
        Some(owner) if owner != caller_id => {
            warn!(owner, caller_id, %action, "Rejected listing mutation by non-owner");
            Err(AppError::authorization(format!(
                "Not authorized to {action} this listing"
            )))
        }
        _ => Ok(()),
    }
}
