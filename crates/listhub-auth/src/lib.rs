//! # listhub-auth
//!
//! Credential and access primitives for Listhub.
//!
//! ## Modules
//!
//! - `jwt`: HS256 access token issuing and verification
//! - `password`: Argon2id password hashing and the registration length policy
//! - `ownership`: who may edit or delete a listing

pub mod jwt;
pub mod ownership;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use ownership::{ListingAction, ensure_can_modify};
pub use password::{PasswordHasher, PasswordValidator};
