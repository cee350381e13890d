//! Entity Models
//!
//! One file per persisted entity. Status fields are closed enums; every
//! enum owns a single `transition()` function which is the only legal way
//! to move an entity between states.

pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod payment;
pub mod print_job;
pub mod printer;

// Re-exports
pub use dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate, TableStatus};
pub use menu_item::MenuItem;
pub use order::{
    Order, OrderCreate, OrderItem, OrderItemCreate, OrderItemStatus, OrderItemUpdate, OrderStatus,
    OrderType, OrderUpdate, OrderVoid, OrderWithItems,
};
pub use payment::{Payment, PaymentMethod, PaymentStatus, SettleRequest};
pub use print_job::{PrintJob, PrintJobStatus, PrintJobType, PrintJobView};
pub use printer::{
    Printer, PrinterConnection, PrinterCreate, PrinterMapping, PrinterMappingUpdate, PrinterRole,
};

/// Rejected state-machine move. Produced only by the per-entity
/// `transition()` functions.
#[derive(Debug, thiserror::Error)]
#[error("{entity} cannot move from '{from}' to '{to}'")]
pub struct TransitionError {
    pub entity: &'static str,
    pub from: String,
    pub to: String,
}

impl TransitionError {
    pub fn new(entity: &'static str, from: impl ToString, to: impl ToString) -> Self {
        Self {
            entity,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
