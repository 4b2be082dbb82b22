//! Core type definitions used across the Listhub workspace.

pub mod pagination;

pub use pagination::Window;
