//! Order and Order Item Models

use super::TransitionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order service type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum OrderType {
    DineIn,
    Takeout,
    Delivery,
}

impl OrderType {
    /// Human-facing ticket label
    pub fn label(self) -> &'static str {
        match self {
            OrderType::DineIn => "Dine In",
            OrderType::Takeout => "Takeout",
            OrderType::Delivery => "Delivery",
        }
    }
}

/// Order lifecycle state
///
/// `open -> sent -> preparing -> ready -> served -> paid`, with `voided`
/// reachable from any non-terminal state. `paid` is reachable from any
/// live state (settlement does not require the kitchen progression).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Sent,
    Preparing,
    Ready,
    Served,
    Paid,
    Voided,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Voided)
    }

    /// Sole transition check for order status.
    pub fn transition(self, to: OrderStatus) -> Result<OrderStatus, TransitionError> {
        use OrderStatus::*;
        let ok = match (self, to) {
            (Open, Sent) | (Sent, Preparing) | (Preparing, Ready) | (Ready, Served) => true,
            (from, Paid) | (from, Voided) => !from.is_terminal(),
            _ => false,
        };
        if ok {
            Ok(to)
        } else {
            Err(TransitionError::new("order", self, to))
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Open => "open",
            OrderStatus::Sent => "sent",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Served => "served",
            OrderStatus::Paid => "paid",
            OrderStatus::Voided => "voided",
        };
        f.write_str(s)
    }
}

/// Order item state: `pending -> sent`, one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum OrderItemStatus {
    Pending,
    Sent,
}

impl OrderItemStatus {
    /// Sole transition check for item status.
    pub fn transition(self, to: OrderItemStatus) -> Result<OrderItemStatus, TransitionError> {
        match (self, to) {
            (OrderItemStatus::Pending, OrderItemStatus::Sent) => Ok(to),
            _ => Err(TransitionError::new("order item", self, to)),
        }
    }
}

impl std::fmt::Display for OrderItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderItemStatus::Pending => "pending",
            OrderItemStatus::Sent => "sent",
        })
    }
}

/// Order entity
///
/// Financial invariant, never stored stale:
/// `total = subtotal + tax + tip - discount` (2 decimal places).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: String,
    pub order_number: i64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub table_id: Option<String>,
    /// Label snapshot taken at creation; survives table renames.
    pub table_label: Option<String>,
    pub server_id: Option<String>,
    pub subtotal: f64,
    pub tax: f64,
    pub tip: f64,
    pub discount: f64,
    pub total: f64,
    pub guest_count: Option<i64>,
    pub notes: Option<String>,
    pub delivery_address: Option<String>,
    pub delivery_contact: Option<String>,
    pub void_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Order item entity; snapshots name/price from the menu at add time.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub menu_item_id: String,
    pub name: String,
    pub name_zh: Option<String>,
    pub quantity: i64,
    pub price: f64,
    pub notes: Option<String>,
    pub status: OrderItemStatus,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Order plus its items (read surface)
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

// ========== Request payloads ==========

/// Create order payload
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreate {
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub table_id: Option<String>,
    pub server_id: Option<String>,
    pub guest_count: Option<i64>,
    pub notes: Option<String>,
    pub delivery_address: Option<String>,
    pub delivery_contact: Option<String>,
}

/// Update order payload; tip/discount changes recompute the total;
/// `status` may only advance along the kitchen progression.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderUpdate {
    pub tip: Option<f64>,
    pub discount: Option<f64>,
    pub notes: Option<String>,
    pub guest_count: Option<i64>,
    pub status: Option<OrderStatus>,
}

/// Add item payload
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemCreate {
    pub menu_item_id: String,
    pub quantity: i64,
    pub notes: Option<String>,
}

/// Update item payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderItemUpdate {
    pub quantity: Option<i64>,
    pub notes: Option<String>,
}

/// Void order payload
#[derive(Debug, Clone, Deserialize)]
pub struct OrderVoid {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitchen_progression() {
        let s = OrderStatus::Open;
        let s = s.transition(OrderStatus::Sent).unwrap();
        let s = s.transition(OrderStatus::Preparing).unwrap();
        let s = s.transition(OrderStatus::Ready).unwrap();
        let s = s.transition(OrderStatus::Served).unwrap();
        assert_eq!(s.transition(OrderStatus::Paid).unwrap(), OrderStatus::Paid);
    }

    #[test]
    fn test_paid_and_voided_from_any_live_state() {
        for from in [
            OrderStatus::Open,
            OrderStatus::Sent,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Served,
        ] {
            assert!(from.transition(OrderStatus::Paid).is_ok());
            assert!(from.transition(OrderStatus::Voided).is_ok());
        }
    }

    #[test]
    fn test_terminal_states_reject_everything() {
        for from in [OrderStatus::Paid, OrderStatus::Voided] {
            for to in [
                OrderStatus::Open,
                OrderStatus::Sent,
                OrderStatus::Paid,
                OrderStatus::Voided,
            ] {
                assert!(from.transition(to).is_err());
            }
        }
    }

    #[test]
    fn test_no_skipping_kitchen_stages() {
        assert!(OrderStatus::Open.transition(OrderStatus::Ready).is_err());
        assert!(OrderStatus::Sent.transition(OrderStatus::Served).is_err());
    }

    #[test]
    fn test_item_status_one_way() {
        assert!(OrderItemStatus::Pending.transition(OrderItemStatus::Sent).is_ok());
        assert!(OrderItemStatus::Sent.transition(OrderItemStatus::Pending).is_err());
        assert!(OrderItemStatus::Sent.transition(OrderItemStatus::Sent).is_err());
    }
}
