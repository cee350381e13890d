//! Print Job API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::PrintJobView;
use crate::db::repository::PrintJobRepository;
use crate::utils::AppResult;

/// Query params for listing print jobs
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    20
}

/// GET /api/print-jobs, most recent first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<PrintJobView>>> {
    let repo = PrintJobRepository::new(state.db.clone());
    let jobs = repo.find_recent(query.limit).await?;
    Ok(Json(jobs))
}
