//! # listhub-entity
//!
//! Domain entity models for Listhub. Every struct in this crate represents
//! a database table row or a domain value object. Database rows derive
//! `sqlx::FromRow`; API-facing models derive `Serialize`.

pub mod listing;
pub mod user;
