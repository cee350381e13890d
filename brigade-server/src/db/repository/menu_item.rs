//! Menu Item Repository
//!
//! Read surface for the catalog. Catalog management is an external
//! collaborator's CRUD; the engine only reads entries to snapshot them.

use sqlx::SqlitePool;

use super::RepoResult;
use crate::db::models::MenuItem;

#[derive(Clone)]
pub struct MenuItemRepository {
    pool: SqlitePool,
}

impl MenuItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Menu listing, optionally filtered to a category and to available
    /// items only.
    pub async fn find_all(
        &self,
        category: Option<&str>,
        available_only: bool,
    ) -> RepoResult<Vec<MenuItem>> {
        let items = match category {
            Some(category) => {
                sqlx::query_as::<_, MenuItem>(
                    r#"
                    SELECT * FROM menu_items
                    WHERE category = ? AND (is_available = 1 OR ? = 0)
                    ORDER BY category, name
                    "#,
                )
                .bind(category)
                .bind(available_only)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, MenuItem>(
                    r#"
                    SELECT * FROM menu_items
                    WHERE is_available = 1 OR ? = 0
                    ORDER BY category, name
                    "#,
                )
                .bind(available_only)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        Ok(
            sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    pub async fn find_by_sku(&self, sku: &str) -> RepoResult<Option<MenuItem>> {
        Ok(
            sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE sku = ?")
                .bind(sku)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    pub async fn count(&self) -> RepoResult<i64> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_items")
                .fetch_one(&self.pool)
                .await?,
        )
    }

    /// Insert a catalog entry (used by the seed routine and tests).
    pub async fn insert(&self, item: &MenuItem) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO menu_items (
                id, sku, name, name_zh, description, price, category,
                is_available, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.id)
        .bind(&item.sku)
        .bind(&item.name)
        .bind(&item.name_zh)
        .bind(&item.description)
        .bind(item.price)
        .bind(&item.category)
        .bind(item.is_available)
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
