//! End-to-end order lifecycle tests against a real SQLite database.

use tempfile::TempDir;

use brigade_server::core::{Config, ServerState};
use brigade_server::db::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, MenuItem, OrderCreate, OrderItemCreate,
    OrderItemUpdate, OrderStatus, OrderType, OrderUpdate, OrderVoid, PaymentMethod,
    PaymentStatus, PrintJobType, PrinterConnection, PrinterCreate, PrinterMappingUpdate,
    SettleRequest, TableStatus,
};
use brigade_server::db::repository::{
    DiningTableRepository, MenuItemRepository, OrderRepository, PrintJobRepository,
    PrinterRepository,
};
use brigade_server::orders::LedgerError;

async fn setup() -> (TempDir, ServerState) {
    let dir = TempDir::new().expect("tempdir");
    let db_path = dir.path().join("brigade-test.db");
    let config = Config::with_overrides(db_path.to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config).await.expect("state");
    (dir, state)
}

async fn create_table(state: &ServerState, label: &str, seats: i64) -> DiningTable {
    DiningTableRepository::new(state.db.clone())
        .create(DiningTableCreate {
            label: label.to_string(),
            seats: Some(seats),
        })
        .await
        .expect("create table")
}

async fn menu_item(state: &ServerState, sku: &str) -> MenuItem {
    MenuItemRepository::new(state.db.clone())
        .find_by_sku(sku)
        .await
        .expect("menu query")
        .expect("seeded menu item")
}

fn dine_in(table_id: &str) -> OrderCreate {
    OrderCreate {
        order_type: OrderType::DineIn,
        table_id: Some(table_id.to_string()),
        server_id: None,
        guest_count: Some(4),
        notes: None,
        delivery_address: None,
        delivery_contact: None,
    }
}

async fn table_by_id(state: &ServerState, id: &str) -> DiningTable {
    DiningTableRepository::new(state.db.clone())
        .find_by_id(id)
        .await
        .expect("table query")
        .expect("table")
}

// ========================================================================
// Scenario A: totals after adding an item
// ========================================================================

#[tokio::test]
async fn test_scenario_a_dine_in_totals() {
    let (_dir, state) = setup().await;
    let table = create_table(&state, "T1", 4).await;
    let dumplings = menu_item(&state, "DS-01").await;
    assert_eq!(dumplings.price, 7.5);

    let ledger = state.ledger();
    let order = ledger.create_order(dine_in(&table.id)).await.unwrap();
    assert_eq!(order.status, OrderStatus::Open);
    assert_eq!(order.total, 0.0);
    assert_eq!(order.table_label.as_deref(), Some("T1"));

    // Table became occupied and bound to the order.
    let table = table_by_id(&state, &table.id).await;
    assert_eq!(table.status, TableStatus::Occupied);
    assert_eq!(table.current_order_id.as_deref(), Some(order.id.as_str()));

    let result = ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: dumplings.id.clone(),
                quantity: 2,
                notes: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(result.order.subtotal, 15.00);
    assert_eq!(result.order.tax, 1.24);
    assert_eq!(result.order.total, 16.24);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].name, "Shrimp Dumplings");
    assert_eq!(result.items[0].price, 7.5);
}

// ========================================================================
// Scenario B: cash settlement with tip
// ========================================================================

#[tokio::test]
async fn test_scenario_b_cash_settlement() {
    let (_dir, state) = setup().await;
    let table = create_table(&state, "T1", 4).await;
    let dumplings = menu_item(&state, "DS-01").await;

    let ledger = state.ledger();
    let order = ledger.create_order(dine_in(&table.id)).await.unwrap();
    ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: dumplings.id,
                quantity: 2,
                notes: None,
            },
        )
        .await
        .unwrap();

    let payment = state
        .payments()
        .settle(SettleRequest {
            order_id: order.id.clone(),
            method: PaymentMethod::Cash,
            tip: 2.0,
            amount_tendered: Some(20.0),
        })
        .await
        .unwrap();

    assert_eq!(payment.amount_due, 18.24);
    assert_eq!(payment.amount_tendered, 20.0);
    assert_eq!(payment.change_due, 1.76);
    assert_eq!(payment.status, PaymentStatus::Approved);
    assert!(payment.reference.starts_with("CASH-"));

    let settled = OrderRepository::new(state.db.clone())
        .find_by_id(&order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(settled.status, OrderStatus::Paid);
    assert_eq!(settled.tip, 2.0);
    assert_eq!(settled.total, 18.24);
    assert!(settled.paid_at.is_some());

    // Table released to cleaning with the binding cleared.
    let table = table_by_id(&state, &table.id).await;
    assert_eq!(table.status, TableStatus::Cleaning);
    assert_eq!(table.current_order_id, None);

    // Settling again conflicts.
    let err = state
        .payments()
        .settle(SettleRequest {
            order_id: order.id.clone(),
            method: PaymentMethod::Card,
            tip: 0.0,
            amount_tendered: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Conflict(_)));
}

// ========================================================================
// Scenario C: voiding
// ========================================================================

#[tokio::test]
async fn test_scenario_c_void_releases_table() {
    let (_dir, state) = setup().await;
    let table = create_table(&state, "T5", 2).await;

    let ledger = state.ledger();
    let order = ledger.create_order(dine_in(&table.id)).await.unwrap();

    let voided = ledger
        .void_order(
            &order.id,
            OrderVoid {
                reason: "guest left".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(voided.status, OrderStatus::Voided);
    assert_eq!(voided.void_reason.as_deref(), Some("guest left"));

    let table = table_by_id(&state, &table.id).await;
    assert_eq!(table.status, TableStatus::Available);
    assert_eq!(table.current_order_id, None);

    // Voiding twice conflicts.
    let err = ledger
        .void_order(
            &order.id,
            OrderVoid {
                reason: "again".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Conflict(_)));
}

#[tokio::test]
async fn test_void_rejects_paid_order_and_empty_reason() {
    let (_dir, state) = setup().await;
    let table = create_table(&state, "T2", 4).await;
    let dumplings = menu_item(&state, "DS-01").await;

    let ledger = state.ledger();
    let order = ledger.create_order(dine_in(&table.id)).await.unwrap();

    let err = ledger
        .void_order(
            &order.id,
            OrderVoid {
                reason: "   ".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: dumplings.id,
                quantity: 1,
                notes: None,
            },
        )
        .await
        .unwrap();
    state
        .payments()
        .settle(SettleRequest {
            order_id: order.id.clone(),
            method: PaymentMethod::Card,
            tip: 0.0,
            amount_tendered: None,
        })
        .await
        .unwrap();

    let err = ledger
        .void_order(
            &order.id,
            OrderVoid {
                reason: "too late".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Conflict(_)));
}

// ========================================================================
// Scenario D: unconfigured printer never blocks the flow
// ========================================================================

#[tokio::test]
async fn test_scenario_d_send_without_printer() {
    let (_dir, state) = setup().await;
    let table = create_table(&state, "T3", 4).await;
    let dumplings = menu_item(&state, "DS-01").await;

    let ledger = state.ledger();
    let order = ledger.create_order(dine_in(&table.id)).await.unwrap();
    let result = ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: dumplings.id,
                quantity: 2,
                notes: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(result.order.subtotal, 15.0);

    // No printer mapped for "kitchen": items go out, no job, no error.
    let sent = ledger.send_to_kitchen(&order.id).await.unwrap();
    assert_eq!(sent, 1);

    let jobs = PrintJobRepository::new(state.db.clone())
        .find_recent(20)
        .await
        .unwrap();
    assert!(jobs.is_empty());

    let order = OrderRepository::new(state.db.clone())
        .find_with_items(&order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(order.order.status, OrderStatus::Sent);
    assert!(order.items.iter().all(|i| i.sent_at.is_some()));
}

// ========================================================================
// Send idempotence
// ========================================================================

#[tokio::test]
async fn test_send_to_kitchen_idempotent() {
    let (_dir, state) = setup().await;
    let table = create_table(&state, "T4", 4).await;
    let dumplings = menu_item(&state, "DS-01").await;
    let rolls = menu_item(&state, "DS-03").await;

    let ledger = state.ledger();
    let order = ledger.create_order(dine_in(&table.id)).await.unwrap();
    ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: dumplings.id,
                quantity: 1,
                notes: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(ledger.send_to_kitchen(&order.id).await.unwrap(), 1);
    // Second send: zero items, status untouched.
    assert_eq!(ledger.send_to_kitchen(&order.id).await.unwrap(), 0);

    let current = OrderRepository::new(state.db.clone())
        .find_by_id(&order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(current.status, OrderStatus::Sent);

    // A later course sends only the new item.
    ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: rolls.id,
                quantity: 1,
                notes: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(ledger.send_to_kitchen(&order.id).await.unwrap(), 1);
}

// ========================================================================
// Boundary: cash tender
// ========================================================================

#[tokio::test]
async fn test_cash_tender_boundaries() {
    let (_dir, state) = setup().await;
    let table = create_table(&state, "T6", 4).await;
    let dumplings = menu_item(&state, "DS-01").await;

    let ledger = state.ledger();
    let order = ledger.create_order(dine_in(&table.id)).await.unwrap();
    let result = ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: dumplings.id,
                quantity: 2,
                notes: None,
            },
        )
        .await
        .unwrap();
    let due = result.order.total;
    assert_eq!(due, 16.24);

    // One cent short is rejected, and the order stays live.
    let err = state
        .payments()
        .settle(SettleRequest {
            order_id: order.id.clone(),
            method: PaymentMethod::Cash,
            tip: 0.0,
            amount_tendered: Some(due - 0.01),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    let still_open = OrderRepository::new(state.db.clone())
        .find_by_id(&order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(still_open.status, OrderStatus::Open);

    // Exact tender yields zero change.
    let payment = state
        .payments()
        .settle(SettleRequest {
            order_id: order.id.clone(),
            method: PaymentMethod::Cash,
            tip: 0.0,
            amount_tendered: Some(due),
        })
        .await
        .unwrap();
    assert_eq!(payment.change_due, 0.0);
}

// ========================================================================
// Creation validation and numbering
// ========================================================================

#[tokio::test]
async fn test_create_order_validation() {
    let (_dir, state) = setup().await;
    let ledger = state.ledger();

    // dine-in without a table
    let err = ledger
        .create_order(OrderCreate {
            order_type: OrderType::DineIn,
            table_id: None,
            server_id: None,
            guest_count: None,
            notes: None,
            delivery_address: None,
            delivery_contact: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    // delivery without contact
    let err = ledger
        .create_order(OrderCreate {
            order_type: OrderType::Delivery,
            table_id: None,
            server_id: None,
            guest_count: None,
            notes: None,
            delivery_address: Some("12 Canal St".to_string()),
            delivery_contact: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    // unknown table
    let err = ledger
        .create_order(dine_in("no-such-table"))
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(_)));

    // takeout needs no table and numbering is strictly increasing
    let first = ledger
        .create_order(OrderCreate {
            order_type: OrderType::Takeout,
            table_id: None,
            server_id: None,
            guest_count: None,
            notes: None,
            delivery_address: None,
            delivery_contact: None,
        })
        .await
        .unwrap();
    let second = ledger
        .create_order(OrderCreate {
            order_type: OrderType::Takeout,
            table_id: None,
            server_id: None,
            guest_count: None,
            notes: None,
            delivery_address: None,
            delivery_contact: None,
        })
        .await
        .unwrap();
    assert_eq!(first.order_number, 1001);
    assert_eq!(second.order_number, 1002);
}

#[tokio::test]
async fn test_two_orders_cannot_share_a_table() {
    let (_dir, state) = setup().await;
    let table = create_table(&state, "T7", 4).await;
    let ledger = state.ledger();

    ledger.create_order(dine_in(&table.id)).await.unwrap();
    let err = ledger.create_order(dine_in(&table.id)).await.unwrap_err();
    assert!(matches!(err, LedgerError::Conflict(_)));
}

// ========================================================================
// Item guards and recomputation
// ========================================================================

#[tokio::test]
async fn test_item_mutations_recompute_totals() {
    let (_dir, state) = setup().await;
    let table = create_table(&state, "T8", 4).await;
    let dumplings = menu_item(&state, "DS-01").await;
    let siu_mai = menu_item(&state, "DS-02").await;

    let ledger = state.ledger();
    let order = ledger.create_order(dine_in(&table.id)).await.unwrap();

    let err = ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: dumplings.id.clone(),
                quantity: 0,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    let err = ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: "no-such-item".to_string(),
                quantity: 1,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(_)));

    let with_first = ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: dumplings.id.clone(),
                quantity: 2,
                notes: None,
            },
        )
        .await
        .unwrap();
    let with_both = ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: siu_mai.id.clone(),
                quantity: 1,
                notes: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(with_both.order.subtotal, 21.75);

    // Quantity change replaces the item's contribution.
    let item_id = with_first.items[0].id.clone();
    let updated = ledger
        .update_item(
            &order.id,
            &item_id,
            OrderItemUpdate {
                quantity: Some(1),
                notes: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.order.subtotal, 14.25);

    // Removal drops it entirely.
    let removed = ledger.remove_item(&order.id, &item_id).await.unwrap();
    assert_eq!(removed.order.subtotal, 6.75);
    assert_eq!(removed.items.len(), 1);

    // The invariant holds at every observation point.
    for snapshot in [&with_first.order, &with_both.order, &updated.order, &removed.order] {
        let expected = brigade_server::orders::money::round_money_f64(
            snapshot.subtotal + snapshot.tax + snapshot.tip - snapshot.discount,
        );
        assert_eq!(snapshot.total, expected);
    }
}

#[tokio::test]
async fn test_closed_order_rejects_item_changes() {
    let (_dir, state) = setup().await;
    let table = create_table(&state, "T9", 4).await;
    let dumplings = menu_item(&state, "DS-01").await;

    let ledger = state.ledger();
    let order = ledger.create_order(dine_in(&table.id)).await.unwrap();
    ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: dumplings.id.clone(),
                quantity: 1,
                notes: None,
            },
        )
        .await
        .unwrap();
    state
        .payments()
        .settle(SettleRequest {
            order_id: order.id.clone(),
            method: PaymentMethod::Card,
            tip: 0.0,
            amount_tendered: None,
        })
        .await
        .unwrap();

    let err = ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: dumplings.id,
                quantity: 1,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Conflict(_)));
}

// ========================================================================
// Order updates: tip recompute and kitchen progression
// ========================================================================

#[tokio::test]
async fn test_update_order_tip_and_progression() {
    let (_dir, state) = setup().await;
    let table = create_table(&state, "T10", 4).await;
    let dumplings = menu_item(&state, "DS-01").await;

    let ledger = state.ledger();
    let order = ledger.create_order(dine_in(&table.id)).await.unwrap();
    ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: dumplings.id,
                quantity: 2,
                notes: None,
            },
        )
        .await
        .unwrap();

    // Tip lands on the total; tax is untouched by a tip-only change.
    let updated = ledger
        .update_order(
            &order.id,
            OrderUpdate {
                tip: Some(3.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.tax, 1.24);
    assert_eq!(updated.total, 19.24);

    // Kitchen progression must not skip stages.
    let err = ledger
        .update_order(
            &order.id,
            OrderUpdate {
                status: Some(OrderStatus::Ready),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Conflict(_)));

    ledger.send_to_kitchen(&order.id).await.unwrap();
    for stage in [OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Served] {
        let updated = ledger
            .update_order(
                &order.id,
                OrderUpdate {
                    status: Some(stage),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, stage);
    }

    // Terminal targets are rejected on this surface.
    let err = ledger
        .update_order(
            &order.id,
            OrderUpdate {
                status: Some(OrderStatus::Paid),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
}

// ========================================================================
// Printing pipeline with configured printers
// ========================================================================

#[tokio::test]
async fn test_print_pipeline_with_configured_printers() {
    let (_dir, state) = setup().await;
    let table = create_table(&state, "T11", 4).await;
    let dumplings = menu_item(&state, "DS-01").await;

    let printers = PrinterRepository::new(state.db.clone());
    let kitchen = printers
        .create(PrinterCreate {
            name: "Kitchen Hot Line".to_string(),
            connection: PrinterConnection::Escpos,
            device_identifier: "192.168.1.50:9100".to_string(),
        })
        .await
        .unwrap();
    let front = printers
        .create(PrinterCreate {
            name: "Front Desk".to_string(),
            connection: PrinterConnection::Driver,
            device_identifier: "FrontDesk-USB".to_string(),
        })
        .await
        .unwrap();
    printers
        .update_mapping(PrinterMappingUpdate {
            kitchen_printer_id: Some(kitchen.id.clone()),
            receipt_printer_id: Some(front.id.clone()),
            bar_printer_id: None,
        })
        .await
        .unwrap();

    let ledger = state.ledger();
    let order = ledger.create_order(dine_in(&table.id)).await.unwrap();
    ledger
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: dumplings.id,
                quantity: 2,
                notes: Some("steamed soft".to_string()),
            },
        )
        .await
        .unwrap();
    ledger.send_to_kitchen(&order.id).await.unwrap();

    state
        .payments()
        .settle(SettleRequest {
            order_id: order.id.clone(),
            method: PaymentMethod::Cash,
            tip: 2.0,
            amount_tendered: Some(20.0),
        })
        .await
        .unwrap();

    let jobs = PrintJobRepository::new(state.db.clone())
        .find_by_order(&order.id)
        .await
        .unwrap();
    assert_eq!(jobs.len(), 2);

    let kitchen_job = jobs.iter().find(|j| j.job_type == PrintJobType::Kitchen).unwrap();
    // ESC/POS envelope around the ticket text.
    assert!(kitchen_job.payload.starts_with("\u{1b}@\n"));
    assert!(kitchen_job.payload.ends_with("\u{1d}V\u{0}"));
    assert!(kitchen_job.payload.contains("KITCHEN TICKET"));
    assert!(kitchen_job.payload.contains("- 2 x Shrimp Dumplings"));
    assert!(kitchen_job.payload.contains("* steamed soft"));
    assert_eq!(kitchen_job.printer_id, kitchen.id);

    let receipt_job = jobs.iter().find(|j| j.job_type == PrintJobType::Receipt).unwrap();
    // Driver-managed printer: plain pass-through text.
    assert!(receipt_job.payload.starts_with("CUSTOMER RECEIPT"));
    assert!(receipt_job.payload.contains("Total: $18.24"));
    assert!(receipt_job.payload.contains("Change Due: $1.76"));
    assert_eq!(receipt_job.printer_id, front.id);
    assert!(receipt_job.payment_id.is_some());

    // Listing surfaces both, newest first, with printer names joined.
    let recent = PrintJobRepository::new(state.db.clone())
        .find_recent(20)
        .await
        .unwrap();
    assert_eq!(recent.len(), 2);
    assert!(recent.iter().any(|j| j.printer_name == "Kitchen Hot Line"));
    assert!(recent.iter().any(|j| j.printer_name == "Front Desk"));
}

// ========================================================================
// Table invariant on the manual surface
// ========================================================================

#[tokio::test]
async fn test_manual_table_edits_respect_occupancy() {
    let (_dir, state) = setup().await;
    let repo = DiningTableRepository::new(state.db.clone());
    let table = create_table(&state, "T12", 4).await;

    // available -> reserved -> available is a manual affair
    let reserved = repo
        .update(
            &table.id,
            DiningTableUpdate {
                label: None,
                seats: None,
                status: Some(TableStatus::Reserved),
            },
        )
        .await
        .unwrap();
    assert_eq!(reserved.status, TableStatus::Reserved);

    // ... but occupied is not reachable by hand
    let err = repo
        .update(
            &table.id,
            DiningTableUpdate {
                label: None,
                seats: None,
                status: Some(TableStatus::Occupied),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        brigade_server::db::repository::RepoError::Conflict(_)
    ));

    // Occupy through the ledger, then verify manual edits are locked out.
    let order = state.ledger().create_order(dine_in(&table.id)).await.unwrap();
    let err = repo
        .update(
            &table.id,
            DiningTableUpdate {
                label: None,
                seats: None,
                status: Some(TableStatus::Available),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        brigade_server::db::repository::RepoError::Conflict(_)
    ));

    // Settle; staff then marks cleaning done.
    let dumplings = menu_item(&state, "DS-01").await;
    state
        .ledger()
        .add_item(
            &order.id,
            OrderItemCreate {
                menu_item_id: dumplings.id,
                quantity: 1,
                notes: None,
            },
        )
        .await
        .unwrap();
    state
        .payments()
        .settle(SettleRequest {
            order_id: order.id,
            method: PaymentMethod::Card,
            tip: 0.0,
            amount_tendered: None,
        })
        .await
        .unwrap();

    let cleaned = repo
        .update(
            &table.id,
            DiningTableUpdate {
                label: None,
                seats: None,
                status: Some(TableStatus::Available),
            },
        )
        .await
        .unwrap();
    assert_eq!(cleaned.status, TableStatus::Available);
    assert_eq!(cleaned.current_order_id, None);
}
