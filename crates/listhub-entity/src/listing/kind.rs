//! Listing type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of property a listing advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    /// Small single-family home.
    #[default]
    Cottage,
    /// Large estate.
    Mansion,
    /// Rustic cabin.
    Cabin,
    /// Castle.
    Castle,
    /// Row house sharing walls with neighbours.
    Townhouse,
}

impl ListingType {
    /// Every variant, in declaration order.
    pub const ALL: [ListingType; 5] = [
        Self::Cottage,
        Self::Mansion,
        Self::Cabin,
        Self::Castle,
        Self::Townhouse,
    ];

    /// Return the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cottage => "cottage",
            Self::Mansion => "mansion",
            Self::Cabin => "cabin",
            Self::Castle => "castle",
            Self::Townhouse => "townhouse",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListingType {
    type Err = listhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                listhub_core::AppError::validation(format!(
                    "Invalid listing type: '{s}'. Expected one of: cottage, mansion, cabin, castle, townhouse"
                ))
            })
    }
}
