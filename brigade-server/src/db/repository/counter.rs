//! Store-backed monotonic counters
//!
//! Counter rows are incremented with `UPDATE ... RETURNING` inside the
//! caller's transaction, so allocation is atomic across workers and
//! survives restarts. Replaces the process-local counter design the
//! engine must not use.

use sqlx::SqliteConnection;

/// Human-facing order number sequence, seeded at 1000 by the migration.
pub const ORDER_NUMBER: &str = "order_number";

/// Increment the named counter and return the new value.
pub async fn next_value(conn: &mut SqliteConnection, name: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "UPDATE counters SET value = value + 1 WHERE name = ? RETURNING value",
    )
    .bind(name)
    .fetch_one(conn)
    .await
}
