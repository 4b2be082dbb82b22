//! Postgres implementations of the store traits.

pub mod listing;
pub mod user;

pub use listing::ListingRepository;
pub use user::UserRepository;
