//! Employee API Module
//!
//! | Path | Method | Success | Description |
//! |------|--------|---------|-------------|
//! | /employees | GET | 200 | List all employees |
//! | /employee/{id} | GET | 200 | Fetch one employee |
//! | /employee | POST | 201 | Create an employee |
//! | /employee/{id} | PUT | 200 | Update an employee |
//! | /employee/{id} | DELETE | 200 | Delete an employee |
//!
//! Updates read the stored record first and write the merged result. The
//! read and the write are separate operations: two concurrent updates of
//! the same employee race, and the last write wins.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/employees", get(handler::list))
        .route("/employee", post(handler::create))
        .route(
            "/employee/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
