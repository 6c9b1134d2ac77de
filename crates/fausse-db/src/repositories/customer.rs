//! PostgreSQL implementation of CustomerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use fausse_core::entities::{Customer, NewCustomer};
use fausse_core::error::DomainError;
use fausse_core::traits::{CustomerRepository, RepoResult};

use crate::models::CustomerModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CustomerRepository
#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Customer>> {
        let result = sqlx::query_as::<_, CustomerModel>(
            r"
            SELECT id, name, email, phone, newsletter_signup, created_at, updated_at
            FROM customers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Customer::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>> {
        let result = sqlx::query_as::<_, CustomerModel>(
            r"
            SELECT id, name, email, phone, newsletter_signup, created_at, updated_at
            FROM customers
            WHERE LOWER(email) = LOWER($1)
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Customer::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerModel>(
            r"
            SELECT id, name, email, phone, newsletter_signup, created_at, updated_at
            FROM customers
            ORDER BY name, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    #[instrument(skip(self, customer), fields(email = %customer.email))]
    async fn create(&self, customer: &NewCustomer) -> RepoResult<Customer> {
        let row = sqlx::query_as::<_, CustomerModel>(
            r"
            INSERT INTO customers (name, email, phone, newsletter_signup)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone, newsletter_signup, created_at, updated_at
            ",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.newsletter_signup)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::CustomerEmailExists))?;

        Ok(Customer::from(row))
    }

    #[instrument(skip(self, customer), fields(id = customer.id))]
    async fn update(&self, customer: &Customer) -> RepoResult<Customer> {
        let row = sqlx::query_as::<_, CustomerModel>(
            r"
            UPDATE customers
            SET name = $2, email = $3, phone = $4, newsletter_signup = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, phone, newsletter_signup, created_at, updated_at
            ",
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.newsletter_signup)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::CustomerEmailExists))?;

        row.map(Customer::from)
            .ok_or(DomainError::CustomerNotFound(customer.id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CustomerNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn reservation_count(&self, id: i64) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reservations WHERE customer_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
