//! Root greeting and health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{HealthResponse, MessageResponse};
use crate::state::AppState;

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to Listhub API"))
}

/// GET /api/health
///
/// Always answers 200; a failing dependency downgrades `status`.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.listing_service.health_check().await {
        Ok(()) => "connected".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            "unavailable".to_string()
        }
    };

    let storage = match state.image_service.health_check().await {
        Ok(true) => "available".to_string(),
        Ok(false) => "unavailable".to_string(),
        Err(e) => {
            tracing::warn!(provider = state.image_service.provider_type(), error = %e, "Storage health check failed");
            "unavailable".to_string()
        }
    };

    let status = if database == "connected" && storage == "available" {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        storage,
    })
}
