//! Payment Processor
//!
//! Settles an order in one transaction: apply the tip and recompute the
//! total, validate the tender against the fresh amount due, record the
//! payment, mark the order paid and release the table to cleaning. The
//! receipt is dispatched after commit, fire-and-forget.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::db::models::{
    Order, OrderStatus, Payment, PaymentMethod, PaymentStatus, SettleRequest, TableStatus,
};
use crate::orders::ledger::{apply_totals, fetch_items, fetch_order};
use crate::orders::money::{round_money, to_decimal, to_f64, validate_adjustment};
use crate::orders::LedgerError;
use crate::pricing::compute_totals;
use crate::printing::{DispatchOutcome, PrintJobDispatcher};
use crate::tables::allocator;

/// Payment processor service
#[derive(Clone)]
pub struct PaymentProcessor {
    pool: SqlitePool,
    tax_rate: f64,
    dispatcher: PrintJobDispatcher,
}

impl PaymentProcessor {
    pub fn new(pool: SqlitePool, tax_rate: f64) -> Self {
        let dispatcher = PrintJobDispatcher::new(pool.clone());
        Self {
            pool,
            tax_rate,
            dispatcher,
        }
    }

    /// Settle an order. The tip lands on the order before the amount due
    /// is computed, so `due` always reflects the final total.
    pub async fn settle(&self, req: SettleRequest) -> Result<Payment, LedgerError> {
        validate_adjustment(req.tip, "tip")?;
        if let Some(tendered) = req.amount_tendered {
            validate_adjustment(tendered, "amount_tendered")?;
        }

        let mut tx = crate::db::begin_immediate(&self.pool).await?;

        let order = fetch_order(&mut tx, &req.order_id).await?;
        match order.status {
            OrderStatus::Paid => {
                return Err(LedgerError::Conflict(format!(
                    "Order {} is already settled",
                    order.order_number
                )));
            }
            OrderStatus::Voided => {
                return Err(LedgerError::Conflict(format!(
                    "Order {} is voided",
                    order.order_number
                )));
            }
            _ => {}
        }

        // Tip first, then due.
        let items = fetch_items(&mut tx, &order.id).await?;
        let totals = compute_totals(&items, self.tax_rate, req.tip, order.discount);
        apply_totals(&mut tx, &order.id, &totals).await?;

        let due = to_decimal(totals.total);
        let (tendered, change) = match req.method {
            PaymentMethod::Cash => {
                let tendered = req.amount_tendered.ok_or_else(|| {
                    LedgerError::Validation(
                        "amount_tendered is required for cash payments".to_string(),
                    )
                })?;
                let tendered = to_decimal(tendered);
                if tendered < due {
                    return Err(LedgerError::Validation(
                        "Cash tendered must cover the amount due".to_string(),
                    ));
                }
                (tendered, round_money(tendered - due))
            }
            // Card-like tenders settle at exactly the amount due; gateway
            // declines arrive later as an external status update.
            PaymentMethod::Card => (due, Decimal::ZERO),
        };

        let status = PaymentStatus::Pending.transition(PaymentStatus::Approved)?;
        let payment = Payment {
            id: Uuid::new_v4().to_string(),
            order_id: order.id.clone(),
            method: req.method,
            amount_due: to_f64(due),
            amount_tendered: to_f64(tendered),
            change_due: to_f64(change),
            status,
            reference: generate_reference(req.method, order.order_number),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO payments (
                id, order_id, method, amount_due, amount_tendered, change_due,
                status, reference, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&payment.id)
        .bind(&payment.order_id)
        .bind(payment.method)
        .bind(payment.amount_due)
        .bind(payment.amount_tendered)
        .bind(payment.change_due)
        .bind(payment.status)
        .bind(&payment.reference)
        .bind(payment.created_at)
        .execute(&mut *tx)
        .await?;

        let paid = order.status.transition(OrderStatus::Paid)?;
        let now = Utc::now();
        sqlx::query("UPDATE orders SET status = ?, paid_at = ?, updated_at = ? WHERE id = ?")
            .bind(paid)
            .bind(now)
            .bind(now)
            .bind(&order.id)
            .execute(&mut *tx)
            .await?;

        if let Some(table_id) = &order.table_id {
            allocator::release(&mut tx, table_id, TableStatus::Cleaning).await?;
        }

        let order = fetch_order(&mut tx, &order.id).await?;
        tx.commit().await?;

        tracing::info!(
            target: "audit",
            order_id = %order.id,
            order_number = order.order_number,
            payment_id = %payment.id,
            method = ?payment.method,
            amount_due = payment.amount_due,
            change_due = payment.change_due,
            reference = %payment.reference,
            "payment settled"
        );

        self.dispatch_receipt(&order, &payment).await;
        Ok(payment)
    }

    /// Queue the customer receipt. Fire-and-forget: the settlement already
    /// committed, so dispatch problems are logged and swallowed.
    async fn dispatch_receipt(&self, order: &Order, payment: &Payment) {
        let repo = crate::db::repository::OrderRepository::new(self.pool.clone());
        let items = match repo.find_items(&order.id).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(order_id = %order.id, error = %e, "receipt items fetch failed");
                return;
            }
        };
        match self.dispatcher.dispatch_receipt(order, &items, payment).await {
            Ok(DispatchOutcome::Queued(job)) => {
                tracing::info!(order_id = %order.id, job_id = %job.id, "receipt queued");
            }
            Ok(DispatchOutcome::NoPrinter) => {}
            Err(e) => {
                tracing::warn!(order_id = %order.id, error = %e, "receipt dispatch failed");
            }
        }
    }
}

/// Unique payment reference, e.g. `CASH-1001-9f3a2c1d`.
fn generate_reference(method: PaymentMethod, order_number: i64) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}-{}",
        method.reference_prefix(),
        order_number,
        &suffix[..8]
    )
}
