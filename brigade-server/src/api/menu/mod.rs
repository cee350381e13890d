//! Menu API Module
//!
//! Read-only surface; catalog CRUD belongs to the external catalog
//! service.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu", get(handler::list))
}
