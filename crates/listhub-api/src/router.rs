//! Route definitions for the Listhub HTTP API.
//!
//! Every route except the root greeting is mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = usize::try_from(state.config.storage.max_upload_size_bytes).unwrap_or(usize::MAX);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(listing_routes())
        .merge(image_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/", get(handlers::health::root))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Registration, login, current user
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Listing search and CRUD
fn listing_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/listings",
            get(handlers::listing::list_listings).post(handlers::listing::create_listing),
        )
        .route(
            "/listings/{id}",
            get(handlers::listing::get_listing)
                .put(handlers::listing::update_listing)
                .delete(handlers::listing::delete_listing),
        )
        .route("/neighborhoods", get(handlers::listing::list_neighborhoods))
}

/// Image upload and proxy
fn image_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(handlers::image::upload_image))
        .route("/images/{filename}", get(handlers::image::get_image))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
