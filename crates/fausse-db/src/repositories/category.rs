//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use fausse_core::entities::{Category, NewCategory};
use fausse_core::error::DomainError;
use fausse_core::traits::{CategoryRepository, RepoResult};

use crate::models::CategoryModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description, display_order, created_at, updated_at
            FROM categories
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description, display_order, created_at, updated_at
            FROM categories
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description, display_order, created_at, updated_at
            FROM categories
            ORDER BY display_order, name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, category: &NewCategory) -> RepoResult<Category> {
        let row = sqlx::query_as::<_, CategoryModel>(
            r"
            INSERT INTO categories (name, description, display_order)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, display_order, created_at, updated_at
            ",
        )
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.display_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::CategoryNameExists))?;

        Ok(Category::from(row))
    }

    #[instrument(skip(self))]
    async fn update(&self, category: &Category) -> RepoResult<Category> {
        let row = sqlx::query_as::<_, CategoryModel>(
            r"
            UPDATE categories
            SET name = $2, description = $3, display_order = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, display_order, created_at, updated_at
            ",
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.display_order)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::CategoryNameExists))?;

        row.map(Category::from)
            .ok_or(DomainError::CategoryNotFound(category.id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CategoryNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn item_count(&self, id: i64) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_items WHERE category_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
