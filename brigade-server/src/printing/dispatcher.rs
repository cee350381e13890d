//! Print job dispatcher
//!
//! Resolves a logical printer role to a configured device, encodes the
//! composed ticket for that device's connection kind, and enqueues a
//! PrintJob. An unconfigured role is not an error: printing is optional
//! infrastructure and must never block the order or payment flow.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::composer;
use crate::db::models::{
    Order, OrderItem, Payment, PrintJob, PrintJobStatus, PrintJobType, Printer, PrinterConnection,
    PrinterMapping, PrinterRole,
};
use crate::db::repository::{PrintJobRepository, PrinterRepository, RepoError};

/// Dispatch failure. Configuration gaps are not failures; they surface as
/// [`DispatchOutcome::NoPrinter`].
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("storage error: {0}")]
    Storage(#[from] RepoError),
}

/// What dispatch produced.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// Payload rendered and job enqueued.
    Queued(PrintJob),
    /// No printer configured for the role; nothing was created.
    NoPrinter,
}

/// Print job dispatcher
#[derive(Clone)]
pub struct PrintJobDispatcher {
    pool: SqlitePool,
}

impl PrintJobDispatcher {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Queue a kitchen ticket for a batch of freshly sent items.
    pub async fn dispatch_kitchen(
        &self,
        order: &Order,
        items: &[OrderItem],
    ) -> Result<DispatchOutcome, DispatchError> {
        let content = composer::render_kitchen_ticket(order, items);
        self.dispatch(PrinterRole::Kitchen, content, Some(&order.id), None)
            .await
    }

    /// Queue a customer receipt for a settled order.
    pub async fn dispatch_receipt(
        &self,
        order: &Order,
        items: &[OrderItem],
        payment: &Payment,
    ) -> Result<DispatchOutcome, DispatchError> {
        let content = composer::render_receipt(order, items, Some(payment));
        self.dispatch(
            PrinterRole::Receipt,
            content,
            Some(&order.id),
            Some(&payment.id),
        )
        .await
    }

    async fn dispatch(
        &self,
        role: PrinterRole,
        content: String,
        order_id: Option<&str>,
        payment_id: Option<&str>,
    ) -> Result<DispatchOutcome, DispatchError> {
        let Some(printer) = self.resolve(role).await? else {
            tracing::warn!(?role, "no printer configured for role; skipping print job");
            return Ok(DispatchOutcome::NoPrinter);
        };

        let payload = encode_payload(printer.connection, content);
        let job = PrintJob {
            id: Uuid::new_v4().to_string(),
            order_id: order_id.map(str::to_string),
            payment_id: payment_id.map(str::to_string),
            printer_id: printer.id.clone(),
            job_type: job_type_for(role),
            payload,
            status: PrintJobStatus::Queued,
            created_at: Utc::now(),
        };

        PrintJobRepository::new(self.pool.clone()).enqueue(&job).await?;

        tracing::info!(
            job_id = %job.id,
            printer = %printer.name,
            job_type = ?job.job_type,
            "print job queued"
        );
        Ok(DispatchOutcome::Queued(job))
    }

    /// Resolve a role through the mapping row. A mapping that points at a
    /// since-deleted printer counts as unconfigured.
    async fn resolve(&self, role: PrinterRole) -> Result<Option<Printer>, DispatchError> {
        let repo = PrinterRepository::new(self.pool.clone());
        let mapping: PrinterMapping = repo.get_mapping().await?;
        let Some(printer_id) = mapping.printer_for(role) else {
            return Ok(None);
        };
        Ok(repo.find_by_id(printer_id).await?)
    }
}

fn job_type_for(role: PrinterRole) -> PrintJobType {
    match role {
        PrinterRole::Kitchen | PrinterRole::Bar => PrintJobType::Kitchen,
        PrinterRole::Receipt => PrintJobType::Receipt,
    }
}

/// Encode ticket text for the printer's connection kind. Each kind owns
/// its branch; adding a kind adds a branch here without touching the
/// dispatch flow.
fn encode_payload(connection: PrinterConnection, content: String) -> String {
    match connection {
        PrinterConnection::Escpos => brigade_printer::wrap_text(&content),
        PrinterConnection::Driver => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_escpos_wraps_envelope() {
        let payload = encode_payload(PrinterConnection::Escpos, "TICKET".to_string());
        assert_eq!(payload, "\u{1b}@\nTICKET\n\n\u{1d}V\u{0}");
    }

    #[test]
    fn test_encode_driver_passthrough() {
        let payload = encode_payload(PrinterConnection::Driver, "TICKET".to_string());
        assert_eq!(payload, "TICKET");
    }

    #[test]
    fn test_job_type_for_roles() {
        assert_eq!(job_type_for(PrinterRole::Kitchen), PrintJobType::Kitchen);
        assert_eq!(job_type_for(PrinterRole::Bar), PrintJobType::Kitchen);
        assert_eq!(job_type_for(PrinterRole::Receipt), PrintJobType::Receipt);
    }
}
