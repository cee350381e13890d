//! Menu API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::MenuItem;
use crate::db::repository::MenuItemRepository;
use crate::utils::AppResult;

/// Query params for the menu listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    #[serde(default = "default_available_only")]
    pub available_only: bool,
}

fn default_available_only() -> bool {
    true
}

/// List menu items, grouped client-side by category.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo
        .find_all(query.category.as_deref(), query.available_only)
        .await?;
    Ok(Json(items))
}
