//! Listing status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sale status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Open for offers.
    #[default]
    Available,
    /// An offer has been accepted.
    Pending,
    /// The sale has closed.
    Sold,
}

impl ListingStatus {
    /// Every variant, in declaration order.
    pub const ALL: [ListingStatus; 3] = [Self::Available, Self::Pending, Self::Sold];

    /// Return the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = listhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "pending" => Ok(Self::Pending),
            "sold" => Ok(Self::Sold),
            _ => Err(listhub_core::AppError::validation(format!(
                "Invalid listing status: '{s}'. Expected one of: available, pending, sold"
            ))),
        }
    }
}
