//! Order API Module
//!
//! All mutations go through the order ledger; reads come from the order
//! repository.

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", get(handler::list).post(handler::create))
        .route(
            "/api/orders/{id}",
            get(handler::get_by_id).put(handler::update),
        )
        .route("/api/orders/{id}/items", post(handler::add_item))
        .route(
            "/api/orders/{id}/items/{item_id}",
            put(handler::update_item).delete(handler::remove_item),
        )
        .route("/api/orders/{id}/send", post(handler::send_to_kitchen))
        .route("/api/orders/{id}/void", post(handler::void))
}
