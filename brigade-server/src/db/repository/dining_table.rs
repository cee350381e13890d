//! Dining Table Repository
//!
//! CRUD surface for tables. Manual status edits pass through the table
//! state machine; transitions into or out of `occupied` are reserved for
//! the order lifecycle and rejected here.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{RepoError, RepoResult};
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate, TableStatus};

#[derive(Clone)]
pub struct DiningTableRepository {
    pool: SqlitePool,
}

impl DiningTableRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All tables, ordered by label
    pub async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        Ok(
            sqlx::query_as::<_, DiningTable>("SELECT * FROM dining_tables ORDER BY label")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        Ok(
            sqlx::query_as::<_, DiningTable>("SELECT * FROM dining_tables WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    pub async fn find_by_label(&self, label: &str) -> RepoResult<Option<DiningTable>> {
        Ok(
            sqlx::query_as::<_, DiningTable>("SELECT * FROM dining_tables WHERE label = ?")
                .bind(label)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        let label = data.label.trim().to_string();
        if label.is_empty() {
            return Err(RepoError::Validation("Table label is required".to_string()));
        }
        if self.find_by_label(&label).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Table '{label}' already exists"
            )));
        }

        let table = DiningTable {
            id: Uuid::new_v4().to_string(),
            label,
            seats: data.seats.unwrap_or(4),
            status: TableStatus::Available,
            current_order_id: None,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO dining_tables (id, label, seats, status, current_order_id, created_at)
            VALUES (?, ?, ?, ?, NULL, ?)
            "#,
        )
        .bind(&table.id)
        .bind(&table.label)
        .bind(table.seats)
        .bind(table.status)
        .bind(table.created_at)
        .execute(&self.pool)
        .await?;

        Ok(table)
    }

    /// Manual update. Status edits go through the transition function, and
    /// `occupied` can be neither entered nor left here; those moves flip
    /// the order binding and belong to the allocator.
    pub async fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {id} not found")))?;

        let status = match data.status {
            None => existing.status,
            Some(to) if to == existing.status => existing.status,
            Some(TableStatus::Occupied) => {
                return Err(RepoError::Conflict(
                    "Tables become occupied by creating an order for them".to_string(),
                ));
            }
            Some(to) => {
                if existing.status == TableStatus::Occupied {
                    return Err(RepoError::Conflict(format!(
                        "Table '{}' has a live order; settle or void it first",
                        existing.label
                    )));
                }
                existing
                    .status
                    .transition(to)
                    .map_err(|e| RepoError::Conflict(e.to_string()))?
            }
        };

        let label = match data.label {
            Some(label) => {
                let label = label.trim().to_string();
                if label.is_empty() {
                    return Err(RepoError::Validation("Table label is required".to_string()));
                }
                if label != existing.label && self.find_by_label(&label).await?.is_some() {
                    return Err(RepoError::Duplicate(format!(
                        "Table '{label}' already exists"
                    )));
                }
                label
            }
            None => existing.label.clone(),
        };
        let seats = data.seats.unwrap_or(existing.seats);

        sqlx::query("UPDATE dining_tables SET label = ?, seats = ?, status = ? WHERE id = ?")
            .bind(&label)
            .bind(seats)
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(DiningTable {
            label,
            seats,
            status,
            ..existing
        })
    }

    /// Hard delete. A table with a live order cannot be removed.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {id} not found")))?;

        if existing.status == TableStatus::Occupied {
            return Err(RepoError::Conflict(format!(
                "Table '{}' has a live order and cannot be deleted",
                existing.label
            )));
        }

        sqlx::query("DELETE FROM dining_tables WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(true)
    }
}
