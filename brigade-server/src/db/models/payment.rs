//! Payment Model

use super::TransitionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tender method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl PaymentMethod {
    /// Receipt label
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
        }
    }

    /// Reference prefix, e.g. `CASH-1001-9f3a2c1d`
    pub fn reference_prefix(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::Card => "CARD",
        }
    }
}

/// Payment state. This engine only produces `approved` payments; `declined`
/// arrives as a status update from the external gateway collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Approved,
    Declined,
}

impl PaymentStatus {
    /// Sole transition check for payment status. Approved payments are
    /// immutable; refunds are a distinct operation outside this engine.
    pub fn transition(self, to: PaymentStatus) -> Result<PaymentStatus, TransitionError> {
        match (self, to) {
            (PaymentStatus::Pending, PaymentStatus::Approved)
            | (PaymentStatus::Pending, PaymentStatus::Declined) => Ok(to),
            _ => Err(TransitionError::new("payment", self, to)),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Approved => "approved",
            PaymentStatus::Declined => "declined",
        })
    }
}

/// Payment entity. At most one approved payment per order.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub method: PaymentMethod,
    /// Order total at settlement time.
    pub amount_due: f64,
    pub amount_tendered: f64,
    /// tendered - due for cash; exactly 0 for card.
    pub change_due: f64,
    pub status: PaymentStatus,
    pub reference: String,
    pub created_at: DateTime<Utc>,
}

/// Settle request payload
#[derive(Debug, Clone, Deserialize)]
pub struct SettleRequest {
    pub order_id: String,
    pub method: PaymentMethod,
    #[serde(default)]
    pub tip: f64,
    pub amount_tendered: Option<f64>,
}
