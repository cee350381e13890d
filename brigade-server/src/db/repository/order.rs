//! Order Repository
//!
//! Read surface for orders. All mutations go through the order ledger.

use sqlx::SqlitePool;

use super::RepoResult;
use crate::db::models::{Order, OrderItem, OrderStatus, OrderType, OrderWithItems};

#[derive(Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Recent orders, newest first, optionally filtered by status/type.
    pub async fn find_all(
        &self,
        status: Option<OrderStatus>,
        order_type: Option<OrderType>,
        limit: i64,
    ) -> RepoResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT * FROM orders
            WHERE (? IS NULL OR status = ?)
              AND (? IS NULL OR order_type = ?)
            ORDER BY created_at DESC, order_number DESC
            LIMIT ?
            "#,
        )
        .bind(status)
        .bind(status)
        .bind(order_type)
        .bind(order_type)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        Ok(sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Order with its items, if present.
    pub async fn find_with_items(&self, id: &str) -> RepoResult<Option<OrderWithItems>> {
        let Some(order) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let items = self.find_items(id).await?;
        Ok(Some(OrderWithItems { order, items }))
    }

    pub async fn find_items(&self, order_id: &str) -> RepoResult<Vec<OrderItem>> {
        Ok(sqlx::query_as::<_, OrderItem>(
            "SELECT * FROM order_items WHERE order_id = ? ORDER BY created_at, id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
