//! In-memory store implementations.
//!
//! Each store keeps its rows behind a single `tokio::sync::RwLock`. They
//! follow the same contracts as the Postgres repositories and back the
//! integration tests and database-less local runs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use listhub_core::error::AppError;
use listhub_core::result::AppResult;
use listhub_core::types::Window;
use listhub_entity::listing::{Listing, ListingChanges, ListingFilter, NewListing};
use listhub_entity::user::{NewUser, User};

use crate::store::{ListingStore, UserStore};

#[derive(Debug)]
struct Table<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// [`UserStore`] held in process memory.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    table: RwLock<Table<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.username == username).cloned())
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let mut table = self.table.write().await;
        if table.rows.values().any(|u| u.email == user.email) {
            return Err(AppError::conflict("Email already registered"));
        }
        if table.rows.values().any(|u| u.username == user.username) {
            return Err(AppError::conflict("Username already taken"));
        }

        let id = table.allocate_id();
        let user = User {
            id,
            email: user.email,
            username: user.username,
            hashed_password: user.password_hash,
            is_active: true,
            created_at: Utc::now(),
        };
        table.rows.insert(id, user.clone());
        Ok(user)
    }
}

/// [`ListingStore`] held in process memory.
#[derive(Debug, Default)]
pub struct MemoryListingStore {
    table: RwLock<Table<Listing>>,
}

impl MemoryListingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListingStore for MemoryListingStore {
    async fn get(&self, id: i64) -> AppResult<Option<Listing>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, listing: NewListing, owner_id: Option<i64>) -> AppResult<Listing> {
        let mut table = self.table.write().await;
        let id = table.allocate_id();
        let listing = listing.into_listing(id, owner_id, Utc::now());
        table.rows.insert(id, listing.clone());
        Ok(listing)
    }

    async fn update(&self, id: i64, changes: ListingChanges) -> AppResult<Option<Listing>> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|listing| {
            changes.apply_to(listing, Utc::now());
            listing.clone()
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn list(&self, filter: &ListingFilter, window: Window) -> AppResult<Vec<Listing>> {
        let table = self.table.read().await;
        let mut matching: Vec<&Listing> =
            table.rows.values().filter(|l| filter.matches(l)).collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(window.apply(matching.into_iter()).cloned().collect())
    }

    async fn neighborhoods(&self) -> AppResult<Vec<String>> {
        let table = self.table.read().await;
        let mut names: Vec<String> = table
            .rows
            .values()
            .filter_map(|l| l.neighborhood.clone())
            .filter(|n| !n.is_empty())
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }
}
