//! Listing service: search, lookup and owner-gated create/update/delete.

use std::sync::Arc;

use tracing::info;

use listhub_auth::ownership::{ListingAction, ensure_can_modify};
use listhub_core::config::ListingConfig;
use listhub_core::error::AppError;
use listhub_core::types::Window;
use listhub_database::store::ListingStore;
use listhub_entity::listing::{Listing, ListingChanges, ListingFilter, NewListing};

use crate::context::RequestContext;

/// Offset/limit as supplied by the client; `None` means "use the default".
#[derive(Debug, Clone, Copy, Default)]
pub struct PageParams {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

/// Handles listing use cases.
#[derive(Debug, Clone)]
pub struct ListingService {
    listings: Arc<dyn ListingStore>,
    config: ListingConfig,
}

impl ListingService {
    pub fn new(listings: Arc<dyn ListingStore>, config: ListingConfig) -> Self {
        Self { listings, config }
    }

    /// Listings matching `filter`, newest first. `limit` is clamped to the
    /// configured maximum page size.
    pub async fn list(&self, filter: ListingFilter, page: PageParams) -> Result<Vec<Listing>, AppError> {
        for bound in [filter.min_price, filter.max_price].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(AppError::validation("Price bounds must be finite numbers"));
            }
        }
        if let (Some(min), Some(max)) = (filter.min_price, filter.max_price) {
            if min > max {
                return Ok(Vec::new());
            }
        }

        let window = Window::new(
            page.skip.unwrap_or(0),
            page.limit.unwrap_or(self.config.default_page_size),
            self.config.max_page_size,
        );
        self.listings.list(&filter.normalized(), window).await
    }

    pub async fn get(&self, id: i64) -> Result<Listing, AppError> {
        self.listings
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Listing not found"))
    }

    /// Create a listing owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, new: NewListing) -> Result<Listing, AppError> {
        validate_price(new.price)?;

        let listing = self.listings.insert(new, Some(ctx.user_id)).await?;
        info!(listing_id = listing.id, owner_id = ctx.user_id, "Listing created");
        Ok(listing)
    }

    /// Apply a partial update. 404 before 403: a missing listing is reported
    /// as such regardless of the caller.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        changes: ListingChanges,
    ) -> Result<Listing, AppError> {
        let existing = self.get(id).await?;
        ensure_can_modify(existing.owner_id, ctx.user_id, ListingAction::Edit)?;
        if let Some(price) = changes.price {
            validate_price(price)?;
        }

        let listing = self
            .listings
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found("Listing not found"))?;

        info!(listing_id = id, user_id = ctx.user_id, "Listing updated");
        Ok(listing)
    }

    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        let existing = self.get(id).await?;
        ensure_can_modify(existing.owner_id, ctx.user_id, ListingAction::Delete)?;

        if !self.listings.delete(id).await? {
            return Err(AppError::not_found("Listing not found"));
        }

        info!(listing_id = id, user_id = ctx.user_id, "Listing deleted");
        Ok(())
    }

    /// Distinct non-empty neighborhoods, sorted.
    pub async fn neighborhoods(&self) -> Result<Vec<String>, AppError> {
        self.listings.neighborhoods().await
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.listings.health_check().await
    }
}

fn validate_price(price: f64) -> Result<(), AppError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(AppError::validation("Price must be a non-negative number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listhub_core::error::ErrorKind;
    use listhub_database::memory::MemoryListingStore;
    use listhub_entity::listing::{ListingStatus, ListingType};

    fn service() -> ListingService {
        ListingService::new(Arc::new(MemoryListingStore::new()), ListingConfig::default())
    }

    fn owner() -> RequestContext {
        RequestContext::new(1, "hansel")
    }

    fn stranger() -> RequestContext {
        RequestContext::new(2, "witch")
    }

    #[tokio::test]
    async fn test_create_sets_owner_and_defaults() {
        let svc = service();
        let listing = svc
            .create(&owner(), NewListing::new("Sugar Cottage", 100.0, "1 Candy Ln"))
            .await
            .unwrap();

        assert_eq!(listing.owner_id, Some(1));
        assert_eq!(listing.listing_type, ListingType::Cottage);
        assert_eq!(listing.status, ListingStatus::Available);
        assert_eq!(svc.get(listing.id).await.unwrap(), listing);
    }

    #[tokio::test]
    async fn test_negative_price_is_rejected() {
        let svc = service();
        let err = svc
            .create(&owner(), NewListing::new("Hut", -1.0, "x"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_non_owner_cannot_update_or_delete() {
        let svc = service();
        let listing = svc
            .create(&owner(), NewListing::new("Sugar Cottage", 100.0, "1 Candy Ln"))
            .await
            .unwrap();

        let changes = ListingChanges {
            price: Some(1.0),
            ..Default::default()
        };
        let err = svc.update(&stranger(), listing.id, changes).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        let err = svc.delete(&stranger(), listing.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);

        assert_eq!(svc.get(listing.id).await.unwrap(), listing);
    }

    #[tokio::test]
    async fn test_missing_listing_is_not_found_before_ownership() {
        let svc = service();
        let err = svc
            .update(&stranger(), 404, ListingChanges::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Listing not found");
    }

    #[tokio::test]
    async fn test_limit_is_clamped_to_max_page_size() {
        let svc = ListingService::new(
            Arc::new(MemoryListingStore::new()),
            ListingConfig {
                default_page_size: 2,
                max_page_size: 3,
            },
        );
        for i in 0..5 {
            svc.create(&owner(), NewListing::new(format!("L{i}"), 1.0, "x"))
                .await
                .unwrap();
        }

        let default_page = svc.list(ListingFilter::default(), PageParams::default()).await.unwrap();
        assert_eq!(default_page.len(), 2);

        let clamped = svc
            .list(
                ListingFilter::default(),
                PageParams {
                    skip: None,
                    limit: Some(1000),
                },
            )
            .await
            .unwrap();
        assert_eq!(clamped.len(), 3);
    }

    #[tokio::test]
    async fn test_non_finite_price_bounds_are_rejected() {
        let svc = service();
        for (min_price, max_price) in [
            (Some(f64::NAN), None),
            (None, Some(f64::INFINITY)),
            (Some(f64::NEG_INFINITY), Some(100.0)),
        ] {
            let filter = ListingFilter {
                min_price,
                max_price,
                ..Default::default()
            };
            let err = svc.list(filter, PageParams::default()).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }
    }

    #[tokio::test]
    async fn test_repeated_update_is_idempotent() {
        let svc = service();
        let listing = svc
            .create(&owner(), NewListing::new("Sugar Cottage", 100.0, "1 Candy Ln"))
            .await
            .unwrap();
        let changes = ListingChanges {
            status: Some(ListingStatus::Pending),
            has_gumdrop_garden: Some(true),
            ..Default::default()
        };

        let mut first = svc.update(&owner(), listing.id, changes.clone()).await.unwrap();
        let mut second = svc.update(&owner(), listing.id, changes).await.unwrap();
        first.updated_at = None;
        second.updated_at = None;
        assert_eq!(first, second);
    }
}
