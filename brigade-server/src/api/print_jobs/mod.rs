//! Print Job API Module
//!
//! Listing only. Jobs are produced by the dispatcher; the printer agent
//! consumes them.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/print-jobs", get(handler::list))
}
