//! Payment API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{Payment, SettleRequest};
use crate::utils::AppResult;

/// POST /api/payments: settle an order
pub async fn settle(
    State(state): State<ServerState>,
    Json(payload): Json<SettleRequest>,
) -> AppResult<Json<Payment>> {
    let payment = state.payments().settle(payload).await?;
    Ok(Json(payment))
}
