//! API routes
//!
//! - [`health`] - liveness probe at `/`
//! - [`employees`] - employee CRUD

pub mod employees;
pub mod health;

use axum::Router;
use shared::error::AppError;

use crate::core::ServerState;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(employees::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

async fn route_not_found() -> AppError {
    AppError::route_not_found()
}

async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}
