//! # listhub-database
//!
//! PostgreSQL connection management, the [`UserStore`] and [`ListingStore`]
//! traits, their Postgres repositories, and in-memory stores used by tests
//! and local development.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::{MemoryListingStore, MemoryUserStore};
pub use repositories::{ListingRepository, UserRepository};
pub use store::{ListingStore, UserStore};
