//! Printer Configuration API Module
//!
//! Devices and the role mapping consumed by the print dispatcher.

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/printers", get(handler::list).post(handler::create))
        .route("/api/printers/{id}", delete(handler::delete))
        .route(
            "/api/printer-mappings",
            get(handler::get_mapping).put(handler::update_mapping),
        )
}
