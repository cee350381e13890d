//! Printer Repository
//!
//! Configuration surface the dispatcher resolves against: printer device
//! records and the single role-mapping row.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{RepoError, RepoResult};
use crate::db::models::{Printer, PrinterCreate, PrinterMapping, PrinterMappingUpdate};

#[derive(Clone)]
pub struct PrinterRepository {
    pool: SqlitePool,
}

impl PrinterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Printer>> {
        Ok(
            sqlx::query_as::<_, Printer>("SELECT * FROM printers ORDER BY name")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Printer>> {
        Ok(
            sqlx::query_as::<_, Printer>("SELECT * FROM printers WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    pub async fn create(&self, data: PrinterCreate) -> RepoResult<Printer> {
        let name = data.name.trim().to_string();
        if name.is_empty() {
            return Err(RepoError::Validation("Printer name is required".to_string()));
        }
        let device_identifier = data.device_identifier.trim().to_string();
        if device_identifier.is_empty() {
            return Err(RepoError::Validation(
                "Device identifier is required".to_string(),
            ));
        }

        let printer = Printer {
            id: Uuid::new_v4().to_string(),
            name,
            connection: data.connection,
            device_identifier,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO printers (id, name, connection, device_identifier, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&printer.id)
        .bind(&printer.name)
        .bind(printer.connection)
        .bind(&printer.device_identifier)
        .bind(printer.created_at)
        .execute(&self.pool)
        .await?;

        Ok(printer)
    }

    /// Delete a printer, clearing any role that mapped to it first.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Printer {id} not found")));
        }

        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"
            UPDATE printer_mappings SET
                kitchen_printer_id = CASE WHEN kitchen_printer_id = ?1 THEN NULL ELSE kitchen_printer_id END,
                receipt_printer_id = CASE WHEN receipt_printer_id = ?1 THEN NULL ELSE receipt_printer_id END,
                bar_printer_id = CASE WHEN bar_printer_id = ?1 THEN NULL ELSE bar_printer_id END
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM printers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(true)
    }

    /// The single role-mapping row.
    pub async fn get_mapping(&self) -> RepoResult<PrinterMapping> {
        Ok(sqlx::query_as::<_, PrinterMapping>(
            "SELECT kitchen_printer_id, receipt_printer_id, bar_printer_id FROM printer_mappings WHERE id = 1",
        )
        .fetch_one(&self.pool)
        .await?)
    }

    /// Replace the role mapping. Every referenced printer must exist.
    pub async fn update_mapping(&self, data: PrinterMappingUpdate) -> RepoResult<PrinterMapping> {
        for (role, id) in [
            ("kitchen", &data.kitchen_printer_id),
            ("receipt", &data.receipt_printer_id),
            ("bar", &data.bar_printer_id),
        ] {
            if let Some(id) = id
                && self.find_by_id(id).await?.is_none()
            {
                return Err(RepoError::Validation(format!(
                    "{role} printer {id} not found"
                )));
            }
        }

        sqlx::query(
            r#"
            UPDATE printer_mappings SET
                kitchen_printer_id = ?, receipt_printer_id = ?, bar_printer_id = ?
            WHERE id = 1
            "#,
        )
        .bind(&data.kitchen_printer_id)
        .bind(&data.receipt_printer_id)
        .bind(&data.bar_printer_id)
        .execute(&self.pool)
        .await?;

        self.get_mapping().await
    }
}
