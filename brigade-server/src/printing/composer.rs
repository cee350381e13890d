//! Ticket composer
//!
//! Pure rendering of order/payment state into ticket text. The receipt's
//! itemized section and totals block are parsed back by register-side
//! tooling, so their line formats are stable.

use rust_decimal::Decimal;

use crate::db::models::{Order, OrderItem, Payment};
use crate::orders::money::{round_money, to_decimal, to_f64};

/// Shared header block: title, order number + service label, location
/// line(s), placed time.
fn format_header(title: &str, order: &Order) -> Vec<String> {
    let mut lines = vec![
        title.to_string(),
        format!("Order #{} · {}", order.order_number, order.order_type.label()),
    ];
    if let Some(label) = &order.table_label {
        lines.push(format!("Table/Label: {label}"));
    }
    if let Some(address) = &order.delivery_address {
        lines.push(format!("Address: {address}"));
    }
    if let Some(contact) = &order.delivery_contact {
        lines.push(format!("Contact: {contact}"));
    }
    lines.push(format!(
        "Placed: {}",
        order.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines
}

/// Render a kitchen ticket for a batch of sent items.
pub fn render_kitchen_ticket(order: &Order, items: &[OrderItem]) -> String {
    let mut lines = format_header("KITCHEN TICKET", order);
    lines.push(String::new());
    lines.push("Items:".to_string());
    for item in items {
        let mut line = format!("- {} x {}", item.quantity, item.name);
        if let Some(zh) = &item.name_zh {
            line.push_str(&format!(" ({zh})"));
        }
        lines.push(line);
        if let Some(note) = &item.notes
            && !note.trim().is_empty()
        {
            lines.push(format!("  * {note}"));
        }
    }
    lines.push(String::new());
    lines.push("Notes: __________________________________".to_string());
    lines.join("\n")
}

/// Render a customer receipt with the financial breakdown and, when
/// settled, the payment detail.
pub fn render_receipt(order: &Order, items: &[OrderItem], payment: Option<&Payment>) -> String {
    let mut lines = format_header("CUSTOMER RECEIPT", order);
    lines.push(String::new());
    lines.push("Items:".to_string());
    for item in items {
        let line_total = line_total(item);
        lines.push(format!(
            "- {} ({} @ ${:.2}) = ${:.2}",
            item.name, item.quantity, item.price, line_total
        ));
    }
    lines.push(String::new());
    lines.push(format!("Subtotal: ${:.2}", order.subtotal));
    lines.push(format!("Tax: ${:.2}", order.tax));
    lines.push(format!("Tip: ${:.2}", order.tip));
    lines.push(format!("Discount: -${:.2}", order.discount));
    lines.push(format!("Total: ${:.2}", order.total));

    if let Some(payment) = payment {
        lines.push(String::new());
        lines.push(format!("Payment Method: {}", payment.method.label()));
        lines.push(format!("Amount Tendered: ${:.2}", payment.amount_tendered));
        lines.push(format!("Change Due: ${:.2}", payment.change_due));
        lines.push(format!("Status: {}", payment.status));
    }

    lines.join("\n")
}

fn line_total(item: &OrderItem) -> f64 {
    to_f64(round_money(
        to_decimal(item.price) * Decimal::from(item.quantity),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{
        OrderItemStatus, OrderStatus, OrderType, PaymentMethod, PaymentStatus,
    };
    use chrono::Utc;

    fn test_order() -> Order {
        Order {
            id: "order-1".to_string(),
            order_number: 1001,
            order_type: OrderType::DineIn,
            status: OrderStatus::Sent,
            table_id: Some("table-1".to_string()),
            table_label: Some("T1".to_string()),
            server_id: None,
            subtotal: 15.00,
            tax: 1.24,
            tip: 2.00,
            discount: 0.0,
            total: 18.24,
            guest_count: Some(4),
            notes: None,
            delivery_address: None,
            delivery_contact: None,
            void_reason: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            paid_at: None,
        }
    }

    fn test_items() -> Vec<OrderItem> {
        vec![OrderItem {
            id: "item-1".to_string(),
            order_id: "order-1".to_string(),
            menu_item_id: "menu-1".to_string(),
            name: "Shrimp Dumplings".to_string(),
            name_zh: Some("虾饺".to_string()),
            quantity: 2,
            price: 7.50,
            notes: Some("extra chili oil".to_string()),
            status: OrderItemStatus::Sent,
            sent_at: Some(Utc::now()),
            created_at: Utc::now(),
        }]
    }

    fn test_payment() -> Payment {
        Payment {
            id: "pay-1".to_string(),
            order_id: "order-1".to_string(),
            method: PaymentMethod::Cash,
            amount_due: 18.24,
            amount_tendered: 20.00,
            change_due: 1.76,
            status: PaymentStatus::Approved,
            reference: "CASH-1001-9f3a2c1d".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_kitchen_ticket_contents() {
        let ticket = render_kitchen_ticket(&test_order(), &test_items());
        assert!(ticket.starts_with("KITCHEN TICKET\n"));
        assert!(ticket.contains("Order #1001 · Dine In"));
        assert!(ticket.contains("Table/Label: T1"));
        assert!(ticket.contains("- 2 x Shrimp Dumplings (虾饺)"));
        assert!(ticket.contains("  * extra chili oil"));
        assert!(ticket.contains("Notes: "));
    }

    #[test]
    fn test_kitchen_ticket_delivery_header() {
        let mut order = test_order();
        order.order_type = OrderType::Delivery;
        order.table_id = None;
        order.table_label = None;
        order.delivery_address = Some("12 Canal St".to_string());
        order.delivery_contact = Some("555-0101".to_string());

        let ticket = render_kitchen_ticket(&order, &test_items());
        assert!(ticket.contains("Order #1001 · Delivery"));
        assert!(ticket.contains("Address: 12 Canal St"));
        assert!(ticket.contains("Contact: 555-0101"));
        assert!(!ticket.contains("Table/Label"));
    }

    #[test]
    fn test_receipt_itemization() {
        let receipt = render_receipt(&test_order(), &test_items(), Some(&test_payment()));
        assert!(receipt.starts_with("CUSTOMER RECEIPT\n"));
        assert!(receipt.contains("- Shrimp Dumplings (2 @ $7.50) = $15.00"));
        assert!(receipt.contains("Payment Method: Cash"));
        assert!(receipt.contains("Amount Tendered: $20.00"));
        assert!(receipt.contains("Change Due: $1.76"));
        assert!(receipt.contains("Status: approved"));
    }

    #[test]
    fn test_receipt_without_payment_has_no_payment_block() {
        let receipt = render_receipt(&test_order(), &test_items(), None);
        assert!(!receipt.contains("Payment Method"));
        assert!(receipt.contains("Total: $18.24"));
    }

    /// Re-parsing the totals block reproduces the stored financials.
    #[test]
    fn test_receipt_round_trip() {
        let order = test_order();
        let receipt = render_receipt(&order, &test_items(), None);

        let parse = |prefix: &str| -> f64 {
            receipt
                .lines()
                .find_map(|l| l.strip_prefix(prefix))
                .and_then(|v| v.trim_start_matches('-').trim_start_matches('$').parse().ok())
                .unwrap()
        };

        assert_eq!(parse("Subtotal: $"), order.subtotal);
        assert_eq!(parse("Tax: $"), order.tax);
        assert_eq!(parse("Tip: $"), order.tip);
        assert_eq!(parse("Discount: -$"), order.discount);
        assert_eq!(parse("Total: $"), order.total);

        // And the itemized section sums back to the subtotal.
        let item_sum: f64 = receipt
            .lines()
            .filter_map(|l| l.rsplit_once("= $").map(|(_, v)| v.parse::<f64>().unwrap()))
            .sum();
        assert_eq!(item_sum, order.subtotal);
    }
}
