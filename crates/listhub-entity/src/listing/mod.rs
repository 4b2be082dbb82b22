//! Listing domain entities.

pub mod filter;
pub mod kind;
pub mod model;
pub mod row;
pub mod status;

pub use filter::ListingFilter;
pub use kind::ListingType;
pub use model::{Listing, ListingChanges, NewListing};
pub use row::ListingRow;
pub use status::ListingStatus;
