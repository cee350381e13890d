//! Order Ledger Module
//!
//! Owns the order/item state machine and every order mutation. Each
//! operation runs in a single `BEGIN IMMEDIATE` transaction so concurrent
//! workers against the same order cannot interleave a read-compute-write
//! cycle; the financial block is recomputed through [`crate::pricing`]
//! before the transaction commits.

pub mod ledger;
pub mod money;

pub use ledger::OrderLedger;

use crate::db::models::TransitionError;
use crate::tables::AllocError;
use crate::utils::AppError;

/// Order-domain error. Shared by the ledger and the payment processor,
/// which settle against the same state machine.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl From<TransitionError> for LedgerError {
    fn from(err: TransitionError) -> Self {
        LedgerError::Conflict(err.to_string())
    }
}

impl From<AllocError> for LedgerError {
    fn from(err: AllocError) -> Self {
        match err {
            AllocError::NotFound(msg) => LedgerError::NotFound(msg),
            AllocError::Conflict(msg) => LedgerError::Conflict(msg),
            AllocError::Storage(e) => LedgerError::Storage(e),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(msg) => AppError::NotFound(msg),
            LedgerError::Validation(msg) => AppError::Validation(msg),
            LedgerError::Conflict(msg) => AppError::Conflict(msg),
            LedgerError::Storage(e) => AppError::Database(e.to_string()),
        }
    }
}
