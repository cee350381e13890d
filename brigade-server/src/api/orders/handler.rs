//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{
    Order, OrderCreate, OrderItemCreate, OrderItemUpdate, OrderStatus, OrderType, OrderUpdate,
    OrderVoid, OrderWithItems,
};
use crate::db::repository::OrderRepository;
use crate::utils::{AppError, AppResult};

/// Query params for listing orders
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<OrderStatus>,
    #[serde(rename = "type")]
    pub order_type: Option<OrderType>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

/// GET /api/orders
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo
        .find_all(query.status, query.order_type, query.limit)
        .await?;
    Ok(Json(orders))
}

/// POST /api/orders
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let order = state.ledger().create_order(payload).await?;
    Ok(Json(order))
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderWithItems>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_with_items(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order {id} not found")))?;
    Ok(Json(order))
}

/// PUT /api/orders/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<Order>> {
    let order = state.ledger().update_order(&id, payload).await?;
    Ok(Json(order))
}

/// POST /api/orders/{id}/items
pub async fn add_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderItemCreate>,
) -> AppResult<Json<OrderWithItems>> {
    let order = state.ledger().add_item(&id, payload).await?;
    Ok(Json(order))
}

/// PUT /api/orders/{id}/items/{item_id}
pub async fn update_item(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(payload): Json<OrderItemUpdate>,
) -> AppResult<Json<OrderWithItems>> {
    let order = state.ledger().update_item(&id, &item_id, payload).await?;
    Ok(Json(order))
}

/// DELETE /api/orders/{id}/items/{item_id}
pub async fn remove_item(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(String, String)>,
) -> AppResult<Json<OrderWithItems>> {
    let order = state.ledger().remove_item(&id, &item_id).await?;
    Ok(Json(order))
}

/// Response for send-to-kitchen
#[derive(Debug, Serialize)]
pub struct SendResult {
    pub sent: i64,
}

/// POST /api/orders/{id}/send
pub async fn send_to_kitchen(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SendResult>> {
    let sent = state.ledger().send_to_kitchen(&id).await?;
    Ok(Json(SendResult { sent }))
}

/// POST /api/orders/{id}/void
pub async fn void(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderVoid>,
) -> AppResult<Json<Order>> {
    let order = state.ledger().void_order(&id, payload).await?;
    Ok(Json(order))
}
