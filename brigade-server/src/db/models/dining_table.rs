//! Dining Table Model

use super::TransitionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Table occupancy state
///
/// `available -> occupied -> cleaning -> available`; `reserved` is a manual
/// side-branch. `occupied` is entered and left only by the table allocator,
/// together with `current_order_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
    Cleaning,
}

impl TableStatus {
    /// Sole transition check for table status.
    pub fn transition(self, to: TableStatus) -> Result<TableStatus, TransitionError> {
        use TableStatus::*;
        let ok = matches!(
            (self, to),
            (Available, Occupied)
                | (Available, Reserved)
                | (Reserved, Occupied)
                | (Reserved, Available)
                | (Occupied, Cleaning)
                | (Occupied, Available)
                | (Cleaning, Available)
        );
        if ok {
            Ok(to)
        } else {
            Err(TransitionError::new("table", self, to))
        }
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TableStatus::Available => "available",
            TableStatus::Occupied => "occupied",
            TableStatus::Reserved => "reserved",
            TableStatus::Cleaning => "cleaning",
        };
        f.write_str(s)
    }
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DiningTable {
    pub id: String,
    pub label: String,
    pub seats: i64,
    pub status: TableStatus,
    /// Invariant: `Some` iff `status == Occupied`.
    pub current_order_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create table payload
#[derive(Debug, Clone, Deserialize)]
pub struct DiningTableCreate {
    pub label: String,
    pub seats: Option<i64>,
}

/// Update table payload (manual edits; occupancy moves belong to the ledger)
#[derive(Debug, Clone, Deserialize)]
pub struct DiningTableUpdate {
    pub label: Option<String>,
    pub seats: Option<i64>,
    pub status: Option<TableStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_cycle() {
        let s = TableStatus::Available;
        let s = s.transition(TableStatus::Occupied).unwrap();
        let s = s.transition(TableStatus::Cleaning).unwrap();
        let s = s.transition(TableStatus::Available).unwrap();
        assert_eq!(s, TableStatus::Available);
    }

    #[test]
    fn test_reserved_side_branch() {
        assert!(TableStatus::Available.transition(TableStatus::Reserved).is_ok());
        assert!(TableStatus::Reserved.transition(TableStatus::Occupied).is_ok());
        assert!(TableStatus::Reserved.transition(TableStatus::Available).is_ok());
    }

    #[test]
    fn test_illegal_moves() {
        assert!(TableStatus::Cleaning.transition(TableStatus::Occupied).is_err());
        assert!(TableStatus::Available.transition(TableStatus::Cleaning).is_err());
        assert!(TableStatus::Occupied.transition(TableStatus::Reserved).is_err());
    }
}
