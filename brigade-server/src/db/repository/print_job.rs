//! Print Job Repository
//!
//! The engine enqueues jobs with status `queued`; the printer agent
//! collaborator consumes them and owns every later transition.

use sqlx::SqlitePool;

use super::RepoResult;
use crate::db::models::{PrintJob, PrintJobView};

#[derive(Clone)]
pub struct PrintJobRepository {
    pool: SqlitePool,
}

impl PrintJobRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a freshly rendered job.
    pub async fn enqueue(&self, job: &PrintJob) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO print_jobs (
                id, order_id, payment_id, printer_id, job_type, payload, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&job.id)
        .bind(&job.order_id)
        .bind(&job.payment_id)
        .bind(&job.printer_id)
        .bind(job.job_type)
        .bind(&job.payload)
        .bind(job.status)
        .bind(job.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Recent jobs, newest first, printer name joined.
    pub async fn find_recent(&self, limit: i64) -> RepoResult<Vec<PrintJobView>> {
        Ok(sqlx::query_as::<_, PrintJobView>(
            r#"
            SELECT
                print_jobs.id, print_jobs.order_id, print_jobs.payment_id,
                print_jobs.printer_id, printers.name AS printer_name,
                print_jobs.job_type, print_jobs.payload, print_jobs.status,
                print_jobs.created_at
            FROM print_jobs
            JOIN printers ON printers.id = print_jobs.printer_id
            ORDER BY print_jobs.created_at DESC, print_jobs.id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Jobs for one order, oldest first.
    pub async fn find_by_order(&self, order_id: &str) -> RepoResult<Vec<PrintJob>> {
        Ok(sqlx::query_as::<_, PrintJob>(
            "SELECT * FROM print_jobs WHERE order_id = ? ORDER BY created_at, id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
