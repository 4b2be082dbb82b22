//! Listing repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use listhub_core::error::{AppError, ErrorKind};
use listhub_core::result::AppResult;
use listhub_core::types::Window;
use listhub_entity::listing::filter::like_pattern;
use listhub_entity::listing::row::flag_to_storage;
use listhub_entity::listing::{Listing, ListingChanges, ListingFilter, ListingRow, NewListing};

use crate::store::ListingStore;

const LISTING_COLUMNS: &str = "id, title, description, price, address, neighborhood, \
     square_feet, num_rooms, num_candy_canes, has_gumdrop_garden, frosting_type, \
     listing_type, status, image_url, owner_id, created_at, updated_at";

/// Postgres-backed [`ListingStore`].
#[derive(Debug, Clone)]
pub struct ListingRepository {
    pool: PgPool,
}

impl ListingRepository {
    /// Create a new listing repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append a `WHERE` clause for every active predicate in `filter`.
pub fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ListingFilter) {
    let mut first = true;

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = like_pattern(search);
        push_conjunction(builder, &mut first);
        builder.push("(title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR description ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR address ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR neighborhood ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
    if let Some(min_price) = filter.min_price {
        push_conjunction(builder, &mut first);
        builder.push("price >= ").push_bind(min_price);
    }
    if let Some(max_price) = filter.max_price {
        push_conjunction(builder, &mut first);
        builder.push("price <= ").push_bind(max_price);
    }
    if let Some(neighborhood) = filter.neighborhood.as_deref().filter(|s| !s.is_empty()) {
        push_conjunction(builder, &mut first);
        builder
            .push("neighborhood ILIKE ")
            .push_bind(like_pattern(neighborhood));
    }
    if let Some(listing_type) = filter.listing_type {
        push_conjunction(builder, &mut first);
        builder.push("listing_type = ").push_bind(listing_type.as_str());
    }
    if let Some(status) = filter.status {
        push_conjunction(builder, &mut first);
        builder.push("status = ").push_bind(status.as_str());
    }
    if let Some(min_rooms) = filter.min_rooms {
        push_conjunction(builder, &mut first);
        builder.push("num_rooms >= ").push_bind(min_rooms);
    }
    if let Some(flag) = filter.has_gumdrop_garden {
        push_conjunction(builder, &mut first);
        builder
            .push("has_gumdrop_garden = ")
            .push_bind(flag_to_storage(flag));
    }
}

fn push_conjunction(builder: &mut QueryBuilder<'_, Postgres>, first: &mut bool) {
    builder.push(if *first { " WHERE " } else { " AND " });
    *first = false;
}

/// Append `SET` assignments for every supplied field. `updated_at` is always set.
fn push_changes(builder: &mut QueryBuilder<'_, Postgres>, changes: ListingChanges) {
    builder.push(" SET updated_at = NOW()");

    macro_rules! assign {
        ($column:literal, $value:expr) => {
            if let Some(value) = $value {
                builder.push(concat!(", ", $column, " = ")).push_bind(value);
            }
        };
    }

    assign!("title", changes.title);
    assign!("description", changes.description);
    assign!("price", changes.price);
    assign!("address", changes.address);
    assign!("neighborhood", changes.neighborhood);
    assign!("square_feet", changes.square_feet);
    assign!("num_rooms", changes.num_rooms);
    assign!("num_candy_canes", changes.num_candy_canes);
    assign!("has_gumdrop_garden", changes.has_gumdrop_garden.map(flag_to_storage));
    assign!("frosting_type", changes.frosting_type);
    assign!("listing_type", changes.listing_type.map(|t| t.as_str()));
    assign!("status", changes.status.map(|s| s.as_str()));
    assign!("image_url", changes.image_url);
}

fn db_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, message, e)
}

#[async_trait]
impl ListingStore for ListingRepository {
    async fn get(&self, id: i64) -> AppResult<Option<Listing>> {
        sqlx::query_as::<_, ListingRow>(&format!(
            "SELECT {LISTING_COLUMNS} FROM listings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find listing"))?
        .map(Listing::try_from)
        .transpose()
    }

    async fn insert(&self, listing: NewListing, owner_id: Option<i64>) -> AppResult<Listing> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            "INSERT INTO listings (title, description, price, address, neighborhood, \
             square_feet, num_rooms, num_candy_canes, has_gumdrop_garden, frosting_type, \
             listing_type, status, image_url, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {LISTING_COLUMNS}"
        ))
        .bind(&listing.title)
        .bind(&listing.description)
        .bind(listing.price)
        .bind(&listing.address)
        .bind(&listing.neighborhood)
        .bind(listing.square_feet)
        .bind(listing.num_rooms)
        .bind(listing.num_candy_canes)
        .bind(flag_to_storage(listing.has_gumdrop_garden))
        .bind(&listing.frosting_type)
        .bind(listing.listing_type.as_str())
        .bind(listing.status.as_str())
        .bind(&listing.image_url)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("listings_owner_id_fkey") =>
            {
                AppError::validation("Listing owner does not exist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create listing", e),
        })?;

        debug!(listing_id = row.id, "Inserted listing row");
        Listing::try_from(row)
    }

    async fn update(&self, id: i64, changes: ListingChanges) -> AppResult<Option<Listing>> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE listings");
        push_changes(&mut builder, changes);
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {LISTING_COLUMNS}"));

        builder
            .build_query_as::<ListingRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to update listing"))?
            .map(Listing::try_from)
            .transpose()
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete listing"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, filter: &ListingFilter, window: Window) -> AppResult<Vec<Listing>> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {LISTING_COLUMNS} FROM listings"));
        push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY created_at DESC, id DESC LIMIT ")
            .push_bind(window.sql_limit())
            .push(" OFFSET ")
            .push_bind(window.sql_offset());

        let rows = builder
            .build_query_as::<ListingRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list listings"))?;

        rows.into_iter().map(Listing::try_from).collect()
    }

    async fn neighborhoods(&self) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT neighborhood FROM listings \
             WHERE neighborhood IS NOT NULL AND neighborhood <> '' \
             ORDER BY neighborhood",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list neighborhoods"))
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(db_error("Database health check failed"))
    }
}
