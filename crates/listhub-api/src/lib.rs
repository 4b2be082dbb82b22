//! # listhub-api
//!
//! HTTP API layer for Listhub built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, request logging),
//! extractors, DTOs, and the mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use router::build_router;
pub use state::AppState;
