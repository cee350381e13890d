//! Print Job Model

use super::TransitionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the payload renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PrintJobType {
    Kitchen,
    Receipt,
}

/// Print job lifecycle. This engine only ever writes `queued`; the printer
/// agent collaborator owns the transitions beyond it. The full lifecycle is
/// modeled here so the stored schema is shared with that agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PrintJobStatus {
    Queued,
    Printing,
    Completed,
    Failed,
}

impl PrintJobStatus {
    /// Sole transition check for print job status.
    pub fn transition(self, to: PrintJobStatus) -> Result<PrintJobStatus, TransitionError> {
        use PrintJobStatus::*;
        let ok = matches!(
            (self, to),
            (Queued, Printing) | (Printing, Completed) | (Printing, Failed) | (Queued, Failed)
        );
        if ok {
            Ok(to)
        } else {
            Err(TransitionError::new("print job", self, to))
        }
    }
}

impl std::fmt::Display for PrintJobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PrintJobStatus::Queued => "queued",
            PrintJobStatus::Printing => "printing",
            PrintJobStatus::Completed => "completed",
            PrintJobStatus::Failed => "failed",
        })
    }
}

/// Queued print work: a rendered payload bound to a resolved printer.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PrintJob {
    pub id: String,
    pub order_id: Option<String>,
    pub payment_id: Option<String>,
    pub printer_id: String,
    pub job_type: PrintJobType,
    pub payload: String,
    pub status: PrintJobStatus,
    pub created_at: DateTime<Utc>,
}

/// Print job with the printer name joined (listing surface).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PrintJobView {
    pub id: String,
    pub order_id: Option<String>,
    pub payment_id: Option<String>,
    pub printer_id: String,
    pub printer_name: String,
    pub job_type: PrintJobType,
    pub payload: String,
    pub status: PrintJobStatus,
    pub created_at: DateTime<Utc>,
}
