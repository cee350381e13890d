//! Menu Item Model
//!
//! Consumed read-only by the order ledger: adding an item snapshots the
//! current name and price onto the order item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Menu catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MenuItem {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub name_zh: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}
