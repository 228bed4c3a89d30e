//! Data models
//!
//! Wire shapes exchanged over the HTTP API. Storage projections live in
//! the server crate next to the database code.

pub mod employee;
mod serde_helpers;

// Re-exports
pub use employee::*;
