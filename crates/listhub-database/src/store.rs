//! Storage traits shared by the Postgres repositories and the in-memory stores.

use async_trait::async_trait;

use listhub_core::result::AppResult;
use listhub_core::types::Window;
use listhub_entity::listing::{Listing, ListingChanges, ListingFilter, NewListing};
use listhub_entity::user::{NewUser, User};

/// Persistence for user credentials.
///
/// Lookups are exact-match. `insert` fails with a `Conflict` error when the
/// email or username is already taken.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn insert(&self, user: NewUser) -> AppResult<User>;
}

/// Persistence and querying for listings.
#[async_trait]
pub trait ListingStore: Send + Sync + std::fmt::Debug + 'static {
    async fn get(&self, id: i64) -> AppResult<Option<Listing>>;

    async fn insert(&self, listing: NewListing, owner_id: Option<i64>) -> AppResult<Listing>;

    /// Apply `changes` and stamp `updated_at`. `None` if the listing does not exist.
    async fn update(&self, id: i64, changes: ListingChanges) -> AppResult<Option<Listing>>;

    /// Hard delete. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Listings matching `filter`, newest first (`created_at DESC, id DESC`),
    /// restricted to `window`.
    async fn list(&self, filter: &ListingFilter, window: Window) -> AppResult<Vec<Listing>>;

    /// Distinct non-empty neighborhoods, sorted ascending.
    async fn neighborhoods(&self) -> AppResult<Vec<String>>;

    /// Whether the store is reachable.
    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}
