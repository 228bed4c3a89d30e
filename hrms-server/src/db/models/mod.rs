//! Storage projections
//!
//! BSON-facing shapes of the wire models in `shared::models`.

pub mod employee;

pub use employee::{EmployeeDocument, EmployeeId, InvalidEmployeeId};
