//! Table Allocator
//!
//! The only writer of `dining_tables.status` transitions into and out of
//! `occupied`. Both sides of the occupancy invariant, status and
//! `current_order_id`, flip in a single UPDATE, executed inside the
//! caller's order transaction so a table move and the order mutation that
//! caused it commit together.

use sqlx::SqliteConnection;

use crate::db::models::{DiningTable, TableStatus, TransitionError};

/// Allocation failure
#[derive(Debug, thiserror::Error)]
pub enum AllocError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl From<TransitionError> for AllocError {
    fn from(err: TransitionError) -> Self {
        AllocError::Conflict(err.to_string())
    }
}

async fn fetch_table(
    conn: &mut SqliteConnection,
    table_id: &str,
) -> Result<DiningTable, AllocError> {
    sqlx::query_as::<_, DiningTable>("SELECT * FROM dining_tables WHERE id = ?")
        .bind(table_id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AllocError::NotFound(format!("Table {table_id} not found")))
}

/// Bind a table to a freshly created order and mark it occupied.
///
/// Legal from `available` and `reserved` (a seated reservation). A table
/// that is already occupied or still being cleaned is a conflict.
pub async fn occupy(
    conn: &mut SqliteConnection,
    table_id: &str,
    order_id: &str,
) -> Result<DiningTable, AllocError> {
    let table = fetch_table(conn, table_id).await?;

    if table.status == TableStatus::Occupied {
        return Err(AllocError::Conflict(format!(
            "Table '{}' is already occupied",
            table.label
        )));
    }
    let status = table.status.transition(TableStatus::Occupied)?;

    sqlx::query("UPDATE dining_tables SET status = ?, current_order_id = ? WHERE id = ?")
        .bind(status)
        .bind(order_id)
        .bind(table_id)
        .execute(conn)
        .await?;

    tracing::debug!(table = %table.label, order_id, "table occupied");

    Ok(DiningTable {
        status,
        current_order_id: Some(order_id.to_string()),
        ..table
    })
}

/// Release an occupied table, clearing its order binding.
///
/// Settlement releases to `cleaning`; voiding releases straight to
/// `available`.
pub async fn release(
    conn: &mut SqliteConnection,
    table_id: &str,
    to: TableStatus,
) -> Result<DiningTable, AllocError> {
    let table = fetch_table(conn, table_id).await?;
    let status = table.status.transition(to)?;

    sqlx::query("UPDATE dining_tables SET status = ?, current_order_id = NULL WHERE id = ?")
        .bind(status)
        .bind(table_id)
        .execute(conn)
        .await?;

    tracing::debug!(table = %table.label, to = %status, "table released");

    Ok(DiningTable {
        status,
        current_order_id: None,
        ..table
    })
}
