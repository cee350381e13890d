//! Order Ledger
//!
//! Every order mutation lives here: creation, line-item changes, kitchen
//! dispatch and voiding. Each operation opens one `BEGIN IMMEDIATE`
//! transaction, takes the write lock up front, recomputes the financial
//! block from the surviving item set, and commits, so two workers
//! mutating the same order serialize instead of interleaving.
//!
//! Print dispatch happens after commit and never rolls the mutation back.

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use super::LedgerError;
use super::money;
use crate::db::models::{
    MenuItem, Order, OrderCreate, OrderItem, OrderItemCreate, OrderItemStatus, OrderItemUpdate,
    OrderStatus, OrderType, OrderUpdate, OrderVoid, OrderWithItems, TableStatus,
};
use crate::db::repository::counter;
use crate::pricing::{OrderTotals, compute_totals};
use crate::printing::{DispatchOutcome, PrintJobDispatcher};
use crate::tables::allocator;

/// Order ledger service
#[derive(Clone)]
pub struct OrderLedger {
    pool: SqlitePool,
    tax_rate: f64,
    dispatcher: PrintJobDispatcher,
}

impl OrderLedger {
    pub fn new(pool: SqlitePool, tax_rate: f64) -> Self {
        let dispatcher = PrintJobDispatcher::new(pool.clone());
        Self {
            pool,
            tax_rate,
            dispatcher,
        }
    }

    /// Create an order. Allocates the human-facing order number from the
    /// store-backed counter and occupies the table, all in one transaction.
    pub async fn create_order(&self, req: OrderCreate) -> Result<Order, LedgerError> {
        validate_create(&req)?;

        let mut tx = crate::db::begin_immediate(&self.pool).await?;

        let order_id = Uuid::new_v4().to_string();
        let order_number = counter::next_value(&mut tx, counter::ORDER_NUMBER).await?;

        let table_label = match &req.table_id {
            Some(table_id) => {
                let table = allocator::occupy(&mut tx, table_id, &order_id).await?;
                Some(table.label)
            }
            None => None,
        };

        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO orders (
                id, order_number, order_type, status, table_id, table_label,
                server_id, subtotal, tax, tip, discount, total,
                guest_count, notes, delivery_address, delivery_contact,
                created_at, updated_at
            ) VALUES (?, ?, ?, 'open', ?, ?, ?, 0, 0, 0, 0, 0, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&order_id)
        .bind(order_number)
        .bind(req.order_type)
        .bind(&req.table_id)
        .bind(&table_label)
        .bind(&req.server_id)
        .bind(req.guest_count)
        .bind(&req.notes)
        .bind(&req.delivery_address)
        .bind(&req.delivery_contact)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let order = fetch_order(&mut tx, &order_id).await?;
        tx.commit().await?;

        tracing::info!(
            order_id = %order.id,
            order_number = order.order_number,
            order_type = ?order.order_type,
            table = order.table_label.as_deref().unwrap_or("-"),
            "order created"
        );
        Ok(order)
    }

    /// Append a line item, snapshotting the menu item's current name and
    /// price, and recompute totals.
    pub async fn add_item(
        &self,
        order_id: &str,
        req: OrderItemCreate,
    ) -> Result<OrderWithItems, LedgerError> {
        money::validate_quantity(req.quantity)?;

        let mut tx = crate::db::begin_immediate(&self.pool).await?;

        let order = fetch_order(&mut tx, order_id).await?;
        guard_open(&order)?;

        let menu_item = fetch_menu_item(&mut tx, &req.menu_item_id).await?;
        if !menu_item.is_available {
            return Err(LedgerError::Validation(format!(
                "Menu item '{}' is not available",
                menu_item.name
            )));
        }

        let item_id = Uuid::new_v4().to_string();
        sqlx::query(
            r#"
            INSERT INTO order_items (
                id, order_id, menu_item_id, name, name_zh, quantity, price,
                notes, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, 'pending', ?)
            "#,
        )
        .bind(&item_id)
        .bind(order_id)
        .bind(&menu_item.id)
        .bind(&menu_item.name)
        .bind(&menu_item.name_zh)
        .bind(req.quantity)
        .bind(menu_item.price)
        .bind(&req.notes)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        let result = recompute(&mut tx, &order, self.tax_rate, order.tip, order.discount).await?;
        tx.commit().await?;

        tracing::debug!(order_id, item = %menu_item.name, qty = req.quantity, "item added");
        Ok(result)
    }

    /// Change an item's quantity or notes and recompute totals.
    pub async fn update_item(
        &self,
        order_id: &str,
        item_id: &str,
        req: OrderItemUpdate,
    ) -> Result<OrderWithItems, LedgerError> {
        if let Some(quantity) = req.quantity {
            money::validate_quantity(quantity)?;
        }

        let mut tx = crate::db::begin_immediate(&self.pool).await?;

        let order = fetch_order(&mut tx, order_id).await?;
        guard_open(&order)?;
        let item = fetch_item(&mut tx, order_id, item_id).await?;

        let quantity = req.quantity.unwrap_or(item.quantity);
        let notes = req.notes.or(item.notes);
        sqlx::query("UPDATE order_items SET quantity = ?, notes = ? WHERE id = ?")
            .bind(quantity)
            .bind(&notes)
            .bind(item_id)
            .execute(&mut *tx)
            .await?;

        let result = recompute(&mut tx, &order, self.tax_rate, order.tip, order.discount).await?;
        tx.commit().await?;

        Ok(result)
    }

    /// Remove an item and recompute totals. Membership is proven before
    /// deletion, so the recomputed subtotal can never go negative.
    pub async fn remove_item(
        &self,
        order_id: &str,
        item_id: &str,
    ) -> Result<OrderWithItems, LedgerError> {
        let mut tx = crate::db::begin_immediate(&self.pool).await?;

        let order = fetch_order(&mut tx, order_id).await?;
        guard_open(&order)?;
        let item = fetch_item(&mut tx, order_id, item_id).await?;

        sqlx::query("DELETE FROM order_items WHERE id = ?")
            .bind(&item.id)
            .execute(&mut *tx)
            .await?;

        let result = recompute(&mut tx, &order, self.tax_rate, order.tip, order.discount).await?;
        tx.commit().await?;

        tracing::debug!(order_id, item = %item.name, "item removed");
        Ok(result)
    }

    /// Update order-level fields. Tip/discount changes re-run the full
    /// recomputation; `status` may only advance along the kitchen
    /// progression (send, void and settle own the other transitions).
    pub async fn update_order(
        &self,
        order_id: &str,
        req: OrderUpdate,
    ) -> Result<Order, LedgerError> {
        if let Some(tip) = req.tip {
            money::validate_adjustment(tip, "tip")?;
        }
        if let Some(discount) = req.discount {
            money::validate_adjustment(discount, "discount")?;
        }

        let mut tx = crate::db::begin_immediate(&self.pool).await?;

        let order = fetch_order(&mut tx, order_id).await?;
        guard_open(&order)?;

        let status = match req.status {
            None => order.status,
            Some(to @ (OrderStatus::Preparing | OrderStatus::Ready | OrderStatus::Served)) => {
                order.status.transition(to)?
            }
            Some(_) => {
                return Err(LedgerError::Validation(
                    "status may only advance to preparing, ready or served here; \
                     use the send, void and settle operations otherwise"
                        .to_string(),
                ));
            }
        };

        let tip = req.tip.unwrap_or(order.tip);
        let discount = req.discount.unwrap_or(order.discount);
        let notes = req.notes.or_else(|| order.notes.clone());
        let guest_count = req.guest_count.or(order.guest_count);

        let items = fetch_items(&mut tx, order_id).await?;
        let totals = compute_totals(&items, self.tax_rate, tip, discount);

        sqlx::query(
            r#"
            UPDATE orders SET
                status = ?, notes = ?, guest_count = ?,
                subtotal = ?, tax = ?, tip = ?, discount = ?, total = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(status)
        .bind(&notes)
        .bind(guest_count)
        .bind(totals.subtotal)
        .bind(totals.tax)
        .bind(totals.tip)
        .bind(totals.discount)
        .bind(totals.total)
        .bind(Utc::now())
        .bind(order_id)
        .execute(&mut *tx)
        .await?;

        let order = fetch_order(&mut tx, order_id).await?;
        tx.commit().await?;

        Ok(order)
    }

    /// Send every pending item to the kitchen, stamping the sent time, and
    /// advance an `open` order to `sent`. Safe to repeat: with nothing
    /// pending it sends zero items and leaves the order untouched.
    ///
    /// Returns the number of items sent.
    pub async fn send_to_kitchen(&self, order_id: &str) -> Result<i64, LedgerError> {
        let mut tx = crate::db::begin_immediate(&self.pool).await?;

        let order = fetch_order(&mut tx, order_id).await?;
        guard_open(&order)?;

        let items = fetch_items(&mut tx, order_id).await?;
        let mut sent: Vec<OrderItem> = Vec::new();
        let now = Utc::now();

        for item in items {
            if item.status != OrderItemStatus::Pending {
                continue;
            }
            let status = item.status.transition(OrderItemStatus::Sent)?;
            sqlx::query("UPDATE order_items SET status = ?, sent_at = ? WHERE id = ?")
                .bind(status)
                .bind(now)
                .bind(&item.id)
                .execute(&mut *tx)
                .await?;
            sent.push(OrderItem {
                status,
                sent_at: Some(now),
                ..item
            });
        }

        let mut order = order;
        if !sent.is_empty() && order.status == OrderStatus::Open {
            let status = order.status.transition(OrderStatus::Sent)?;
            sqlx::query("UPDATE orders SET status = ?, updated_at = ? WHERE id = ?")
                .bind(status)
                .bind(now)
                .bind(order_id)
                .execute(&mut *tx)
                .await?;
            order.status = status;
            order.updated_at = now;
        }

        tx.commit().await?;

        let count = sent.len() as i64;
        if count > 0 {
            tracing::info!(order_id, count, "items sent to kitchen");
            self.dispatch_kitchen_ticket(&order, &sent).await;
        }
        Ok(count)
    }

    /// Void a live order, releasing its table straight back to `available`.
    /// A paid order cannot be voided; a reason is required for the audit
    /// trail.
    pub async fn void_order(&self, order_id: &str, req: OrderVoid) -> Result<Order, LedgerError> {
        let reason = req.reason.trim();
        if reason.is_empty() {
            return Err(LedgerError::Validation("A void reason is required".to_string()));
        }

        let mut tx = crate::db::begin_immediate(&self.pool).await?;

        let order = fetch_order(&mut tx, order_id).await?;
        if order.status == OrderStatus::Paid {
            return Err(LedgerError::Conflict(
                "A paid order cannot be voided".to_string(),
            ));
        }
        let status = order.status.transition(OrderStatus::Voided)?;

        sqlx::query("UPDATE orders SET status = ?, void_reason = ?, updated_at = ? WHERE id = ?")
            .bind(status)
            .bind(reason)
            .bind(Utc::now())
            .bind(order_id)
            .execute(&mut *tx)
            .await?;

        if let Some(table_id) = &order.table_id {
            allocator::release(&mut tx, table_id, TableStatus::Available).await?;
        }

        let order = fetch_order(&mut tx, order_id).await?;
        tx.commit().await?;

        tracing::info!(
            target: "audit",
            order_id = %order.id,
            order_number = order.order_number,
            reason,
            total = order.total,
            "order voided"
        );
        Ok(order)
    }

    /// Queue a kitchen ticket for a freshly sent batch. Fire-and-forget:
    /// a missing printer or a dispatch failure never surfaces to the
    /// caller, the order mutation already committed.
    async fn dispatch_kitchen_ticket(&self, order: &Order, items: &[OrderItem]) {
        match self.dispatcher.dispatch_kitchen(order, items).await {
            Ok(DispatchOutcome::Queued(job)) => {
                tracing::info!(order_id = %order.id, job_id = %job.id, "kitchen ticket queued");
            }
            Ok(DispatchOutcome::NoPrinter) => {}
            Err(e) => {
                tracing::warn!(order_id = %order.id, error = %e, "kitchen ticket dispatch failed");
            }
        }
    }
}

fn validate_create(req: &OrderCreate) -> Result<(), LedgerError> {
    if let Some(n) = req.guest_count
        && n < 1
    {
        return Err(LedgerError::Validation(format!(
            "guest count must be at least 1, got {n}"
        )));
    }
    match req.order_type {
        OrderType::DineIn if req.table_id.is_none() => Err(LedgerError::Validation(
            "A table is required for dine-in orders".to_string(),
        )),
        OrderType::Delivery => {
            if req.delivery_address.as_deref().unwrap_or("").trim().is_empty() {
                return Err(LedgerError::Validation(
                    "A delivery address is required".to_string(),
                ));
            }
            if req.delivery_contact.as_deref().unwrap_or("").trim().is_empty() {
                return Err(LedgerError::Validation(
                    "A delivery contact is required".to_string(),
                ));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Reject mutations against a terminal order.
fn guard_open(order: &Order) -> Result<(), LedgerError> {
    if order.status.is_terminal() {
        return Err(LedgerError::Conflict(format!(
            "Order {} is already {}",
            order.order_number, order.status
        )));
    }
    Ok(())
}

// ========== Transaction-scoped queries (shared with the payment processor) ==========

pub(crate) async fn fetch_order(
    conn: &mut SqliteConnection,
    order_id: &str,
) -> Result<Order, LedgerError> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = ?")
        .bind(order_id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| LedgerError::NotFound(format!("Order {order_id} not found")))
}

pub(crate) async fn fetch_items(
    conn: &mut SqliteConnection,
    order_id: &str,
) -> Result<Vec<OrderItem>, LedgerError> {
    Ok(
        sqlx::query_as::<_, OrderItem>(
            "SELECT * FROM order_items WHERE order_id = ? ORDER BY created_at, id",
        )
        .bind(order_id)
        .fetch_all(conn)
        .await?,
    )
}

async fn fetch_item(
    conn: &mut SqliteConnection,
    order_id: &str,
    item_id: &str,
) -> Result<OrderItem, LedgerError> {
    sqlx::query_as::<_, OrderItem>("SELECT * FROM order_items WHERE id = ? AND order_id = ?")
        .bind(item_id)
        .bind(order_id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| LedgerError::NotFound(format!("Order item {item_id} not found")))
}

async fn fetch_menu_item(
    conn: &mut SqliteConnection,
    menu_item_id: &str,
) -> Result<MenuItem, LedgerError> {
    sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = ?")
        .bind(menu_item_id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| LedgerError::NotFound(format!("Menu item {menu_item_id} not found")))
}

/// Write a freshly computed financial block onto the order row.
pub(crate) async fn apply_totals(
    conn: &mut SqliteConnection,
    order_id: &str,
    totals: &OrderTotals,
) -> Result<(), LedgerError> {
    sqlx::query(
        r#"
        UPDATE orders SET
            subtotal = ?, tax = ?, tip = ?, discount = ?, total = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(totals.subtotal)
    .bind(totals.tax)
    .bind(totals.tip)
    .bind(totals.discount)
    .bind(totals.total)
    .bind(Utc::now())
    .bind(order_id)
    .execute(conn)
    .await?;
    Ok(())
}

/// Recompute totals from the current item set and persist them, returning
/// the refreshed order with its items.
async fn recompute(
    conn: &mut SqliteConnection,
    order: &Order,
    tax_rate: f64,
    tip: f64,
    discount: f64,
) -> Result<OrderWithItems, LedgerError> {
    let items = fetch_items(conn, &order.id).await?;
    let totals = compute_totals(&items, tax_rate, tip, discount);
    apply_totals(conn, &order.id, &totals).await?;
    let order = fetch_order(conn, &order.id).await?;
    Ok(OrderWithItems { order, items })
}
