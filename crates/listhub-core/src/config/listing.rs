//! Listing query configuration.

use serde::{Deserialize, Serialize};

/// Page-size bounds for the listing search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Page size used when the client sends no `limit`.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Upper bound applied to any client-supplied `limit`.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_page_size() -> u64 {
    50
}

fn default_max_page_size() -> u64 {
    100
}
