//! Printer Configuration API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Printer, PrinterCreate, PrinterMapping, PrinterMappingUpdate};
use crate::db::repository::PrinterRepository;
use crate::utils::AppResult;

/// GET /api/printers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Printer>>> {
    let repo = PrinterRepository::new(state.db.clone());
    let printers = repo.find_all().await?;
    Ok(Json(printers))
}

/// POST /api/printers
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PrinterCreate>,
) -> AppResult<Json<Printer>> {
    let repo = PrinterRepository::new(state.db.clone());
    let printer = repo.create(payload).await?;
    Ok(Json(printer))
}

/// DELETE /api/printers/{id}; also clears the role mapping
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = PrinterRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}

/// GET /api/printer-mappings
pub async fn get_mapping(State(state): State<ServerState>) -> AppResult<Json<PrinterMapping>> {
    let repo = PrinterRepository::new(state.db.clone());
    let mapping = repo.get_mapping().await?;
    Ok(Json(mapping))
}

/// PUT /api/printer-mappings
pub async fn update_mapping(
    State(state): State<ServerState>,
    Json(payload): Json<PrinterMappingUpdate>,
) -> AppResult<Json<PrinterMapping>> {
    let repo = PrinterRepository::new(state.db.clone());
    let mapping = repo.update_mapping(payload).await?;
    Ok(Json(mapping))
}
