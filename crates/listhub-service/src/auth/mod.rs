//! Registration, login and bearer token resolution.

pub mod service;

pub use service::{AuthService, LoginToken};
