//! PostgreSQL implementation of MenuItemRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use fausse_core::entities::{MenuItem, NewMenuItem};
use fausse_core::error::DomainError;
use fausse_core::traits::{MenuItemRepository, RepoResult};

use crate::models::MenuItemModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MenuItemRepository
#[derive(Clone)]
pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<MenuItem>> {
        let result = sqlx::query_as::<_, MenuItemModel>(
            r"
            SELECT id, category_id, name, description, price, image_url, is_vegetarian, is_vegan,
                   is_gluten_free, is_featured, available, display_order, created_at, updated_at
            FROM menu_items
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(MenuItem::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, category_id: Option<i64>) -> RepoResult<Vec<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItemModel>(
            r"
            SELECT id, category_id, name, description, price, image_url, is_vegetarian, is_vegan,
                   is_gluten_free, is_featured, available, display_order, created_at, updated_at
            FROM menu_items
            WHERE $1::BIGINT IS NULL OR category_id = $1
            ORDER BY category_id, display_order, name
            ",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    #[instrument(skip(self), fields(name = %item.name))]
    async fn create(&self, item: &NewMenuItem) -> RepoResult<MenuItem> {
        let row = sqlx::query_as::<_, MenuItemModel>(
            r"
            INSERT INTO menu_items (category_id, name, description, price, image_url, is_vegetarian,
                                    is_vegan, is_gluten_free, is_featured, available, display_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, category_id, name, description, price, image_url, is_vegetarian, is_vegan,
                      is_gluten_free, is_featured, available, display_order, created_at, updated_at
            ",
        )
        .bind(item.category_id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price)
        .bind(&item.image_url)
        .bind(item.is_vegetarian)
        .bind(item.is_vegan)
        .bind(item.is_gluten_free)
        .bind(item.is_featured)
        .bind(item.available)
        .bind(item.display_order)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(MenuItem::from(row))
    }

    #[instrument(skip(self), fields(id = item.id))]
    async fn update(&self, item: &MenuItem) -> RepoResult<MenuItem> {
        let row = sqlx::query_as::<_, MenuItemModel>(
            r"
            UPDATE menu_items
            SET category_id = $2, name = $3, description = $4, price = $5, image_url = $6,
                is_vegetarian = $7, is_vegan = $8, is_gluten_free = $9, is_featured = $10,
                available = $11, display_order = $12, updated_at = NOW()
            WHERE id = $1
            RETURNING id, category_id, name, description, price, image_url, is_vegetarian, is_vegan,
                      is_gluten_free, is_featured, available, display_order, created_at, updated_at
            ",
        )
        .bind(item.id)
        .bind(item.category_id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price)
        .bind(&item.image_url)
        .bind(item.is_vegetarian)
        .bind(item.is_vegan)
        .bind(item.is_gluten_free)
        .bind(item.is_featured)
        .bind(item.available)
        .bind(item.display_order)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(MenuItem::from)
            .ok_or(DomainError::MenuItemNotFound(item.id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MenuItemNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_items")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
