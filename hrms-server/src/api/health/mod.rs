//! Liveness probe
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | / | GET | Returns the plain-text body `Hello` |

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(hello))
}

async fn hello() -> &'static str {
    "Hello"
}
