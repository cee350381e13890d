//! Order Totals Calculator
//!
//! Stateless function from line items + adjustments to the financial
//! block persisted on the order. The same rule runs on every mutation
//! that touches items, tip or discount:
//!
//! ```text
//! subtotal = sum(price * quantity)            over all items, any status
//! tax      = round2(subtotal * tax_rate)
//! total    = round2(subtotal + tax + tip - discount)
//! ```

use rust_decimal::prelude::*;

use crate::db::models::OrderItem;
use crate::orders::money::{round_money, to_decimal, to_f64};

/// Result of an order price calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub tip: f64,
    pub discount: f64,
    pub total: f64,
}

/// Compute the full financial block for an order.
///
/// The subtotal counts every item regardless of kitchen status: sent
/// items bill the same as pending ones. Tax is recomputed from the fresh
/// subtotal on every call; tip and discount pass through rounded.
pub fn compute_totals(items: &[OrderItem], tax_rate: f64, tip: f64, discount: f64) -> OrderTotals {
    let subtotal: Decimal = items
        .iter()
        .map(|item| to_decimal(item.price) * Decimal::from(item.quantity))
        .sum();

    let tax = round_money(subtotal * to_decimal(tax_rate));
    let tip = round_money(to_decimal(tip));
    let discount = round_money(to_decimal(discount));
    let total = round_money(subtotal + tax + tip - discount);

    OrderTotals {
        subtotal: to_f64(subtotal),
        tax: to_f64(tax),
        tip: to_f64(tip),
        discount: to_f64(discount),
        total: to_f64(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::OrderItemStatus;
    use chrono::Utc;

    fn item(price: f64, quantity: i64, status: OrderItemStatus) -> OrderItem {
        OrderItem {
            id: "item-1".to_string(),
            order_id: "order-1".to_string(),
            menu_item_id: "menu-1".to_string(),
            name: "Shrimp Dumplings".to_string(),
            name_zh: None,
            quantity,
            price,
            notes: None,
            status,
            sent_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_order() {
        let totals = compute_totals(&[], 0.0825, 0.0, 0.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn test_scenario_a() {
        // {price 7.50, qty 2} -> subtotal 15.00, tax 1.24, total 16.24
        let items = vec![item(7.50, 2, OrderItemStatus::Pending)];
        let totals = compute_totals(&items, 0.0825, 0.0, 0.0);
        assert_eq!(totals.subtotal, 15.00);
        assert_eq!(totals.tax, 1.24);
        assert_eq!(totals.total, 16.24);
    }

    #[test]
    fn test_tip_raises_total_without_touching_tax() {
        let items = vec![item(7.50, 2, OrderItemStatus::Pending)];
        let totals = compute_totals(&items, 0.0825, 2.0, 0.0);
        assert_eq!(totals.subtotal, 15.00);
        assert_eq!(totals.tax, 1.24);
        assert_eq!(totals.total, 18.24);
    }

    #[test]
    fn test_discount_subtracts() {
        let items = vec![item(10.0, 1, OrderItemStatus::Pending)];
        let totals = compute_totals(&items, 0.10, 0.0, 3.0);
        assert_eq!(totals.subtotal, 10.0);
        assert_eq!(totals.tax, 1.0);
        assert_eq!(totals.total, 8.0);
    }

    #[test]
    fn test_sent_items_still_billed() {
        let items = vec![
            item(7.50, 2, OrderItemStatus::Sent),
            item(5.25, 1, OrderItemStatus::Pending),
        ];
        let totals = compute_totals(&items, 0.0825, 0.0, 0.0);
        assert_eq!(totals.subtotal, 20.25);
        assert_eq!(totals.tax, 1.67);
        assert_eq!(totals.total, 21.92);
    }

    #[test]
    fn test_invariant_holds_after_rounding() {
        let items = vec![item(13.25, 3, OrderItemStatus::Pending)];
        let totals = compute_totals(&items, 0.0825, 1.50, 0.75);
        let expected =
            crate::orders::money::round_money_f64(totals.subtotal + totals.tax + totals.tip - totals.discount);
        assert_eq!(totals.total, expected);
    }
}
