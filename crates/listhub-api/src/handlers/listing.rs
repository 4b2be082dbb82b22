//! Listing handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};

use listhub_core::error::AppError;
use listhub_entity::listing::Listing;

use crate::dto::request::{CreateListingRequest, ListingQuery, UpdateListingRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/listings
pub async fn list_listings(
    State(state): State<AppState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Listing>>> {
    let Query(query) = query.map_err(|rejection| AppError::validation(rejection.body_text()))?;
    let (filter, page) = query.into_parts();

    let listings = state.listing_service.list(filter, page).await?;
    Ok(Json(listings))
}

/// GET /api/neighborhoods
pub async fn list_neighborhoods(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.listing_service.neighborhoods().await?))
}

/// GET /api/listings/{id}
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Listing>> {
    Ok(Json(state.listing_service.get(id).await?))
}

/// POST /api/listings
pub async fn create_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateListingRequest>,
) -> ApiResult<Json<Listing>> {
    let listing = state.listing_service.create(&auth, req.into()).await?;
    Ok(Json(listing))
}

/// PUT /api/listings/{id}
pub async fn update_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateListingRequest>,
) -> ApiResult<Json<Listing>> {
    let listing = state.listing_service.update(&auth, id, req.into()).await?;
    Ok(Json(listing))
}

/// DELETE /api/listings/{id}
pub async fn delete_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state.listing_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Listing deleted successfully")))
}
