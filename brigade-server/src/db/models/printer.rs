//! Printer Configuration Models
//!
//! External collaborator surface: the engine reads these to resolve where
//! a print job's payload should be delivered. Device transmission itself
//! is out of scope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Printer connection kind. Each kind owns its own payload encoding in the
/// dispatcher; adding a kind means adding a branch there, not touching
/// dispatch logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PrinterConnection {
    /// Control-sequence printer: payload wrapped in the ESC/POS envelope.
    Escpos,
    /// Driver-managed printer: plain text pass-through.
    Driver,
}

/// Logical printer role resolved through the mapping row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterRole {
    Kitchen,
    Receipt,
    Bar,
}

/// Printer device record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Printer {
    pub id: String,
    pub name: String,
    pub connection: PrinterConnection,
    pub device_identifier: String,
    pub created_at: DateTime<Utc>,
}

/// Create printer payload
#[derive(Debug, Clone, Deserialize)]
pub struct PrinterCreate {
    pub name: String,
    pub connection: PrinterConnection,
    pub device_identifier: String,
}

/// Role -> printer mapping (single row)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PrinterMapping {
    pub kitchen_printer_id: Option<String>,
    pub receipt_printer_id: Option<String>,
    pub bar_printer_id: Option<String>,
}

impl PrinterMapping {
    /// Printer id configured for a role, if any.
    pub fn printer_for(&self, role: PrinterRole) -> Option<&str> {
        match role {
            PrinterRole::Kitchen => self.kitchen_printer_id.as_deref(),
            PrinterRole::Receipt => self.receipt_printer_id.as_deref(),
            PrinterRole::Bar => self.bar_printer_id.as_deref(),
        }
    }
}

/// Update mapping payload. Every referenced printer must exist.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrinterMappingUpdate {
    pub kitchen_printer_id: Option<String>,
    pub receipt_printer_id: Option<String>,
    pub bar_printer_id: Option<String>,
}
