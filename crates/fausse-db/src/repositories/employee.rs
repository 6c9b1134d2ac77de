//! PostgreSQL implementation of EmployeeRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use fausse_core::entities::{Employee, EmployeeRole, NewEmployee};
use fausse_core::error::DomainError;
use fausse_core::traits::{EmployeeRepository, RepoResult};

use crate::mappers::role_to_str;
use crate::models::EmployeeModel;

use super::error::{map_db_error, map_unique_violation_on};

/// The username and email indexes are both unique; report whichever fired
fn employee_conflict(constraint: Option<&str>) -> DomainError {
    match constraint {
        Some(name) if name.contains("email") => DomainError::EmployeeEmailExists,
        _ => DomainError::UsernameExists,
    }
}

/// PostgreSQL implementation of EmployeeRepository
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let result = sqlx::query_as::<_, EmployeeModel>(
            r"
            SELECT id, username, email, first_name, last_name, password_hash, role,
                   is_active, last_login, created_at, updated_at
            FROM employees
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Employee::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Employee>> {
        let result = sqlx::query_as::<_, EmployeeModel>(
            r"
            SELECT id, username, email, first_name, last_name, password_hash, role,
                   is_active, last_login, created_at, updated_at
            FROM employees
            WHERE LOWER(username) = LOWER($1)
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Employee::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeModel>(
            r"
            SELECT id, username, email, first_name, last_name, password_hash, role,
                   is_active, last_login, created_at, updated_at
            FROM employees
            ORDER BY username
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str, except: Option<i64>) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM employees
                WHERE LOWER(username) = LOWER($1) AND ($2::BIGINT IS NULL OR id <> $2)
            )
            ",
        )
        .bind(username)
        .bind(except)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str, except: Option<i64>) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM employees
                WHERE LOWER(email) = LOWER($1) AND ($2::BIGINT IS NULL OR id <> $2)
            )
            ",
        )
        .bind(email)
        .bind(except)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn has_active_with_role(&self, role: EmployeeRole) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE role = $1 AND is_active = TRUE)",
        )
        .bind(role_to_str(role))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, employee, password_hash), fields(username = %employee.username))]
    async fn create(&self, employee: &NewEmployee, password_hash: &str) -> RepoResult<Employee> {
        let row = sqlx::query_as::<_, EmployeeModel>(
            r"
            INSERT INTO employees (username, email, first_name, last_name, password_hash, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, email, first_name, last_name, password_hash, role,
                      is_active, last_login, created_at, updated_at
            ",
        )
        .bind(&employee.username)
        .bind(&employee.email)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(password_hash)
        .bind(role_to_str(employee.role))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation_on(e, employee_conflict))?;

        Ok(Employee::from(row))
    }

    #[instrument(
        skip(self, employee, new_password_hash),
        fields(id = employee.id, password_changed = new_password_hash.is_some())
    )]
    async fn update(
        &self,
        employee: &Employee,
        new_password_hash: Option<&str>,
    ) -> RepoResult<Employee> {
        let row = sqlx::query_as::<_, EmployeeModel>(
            r"
            UPDATE employees
            SET username = $2, email = $3, first_name = $4, last_name = $5, role = $6,
                is_active = $7, password_hash = COALESCE($8, password_hash),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, username, email, first_name, last_name, password_hash, role,
                      is_active, last_login, created_at, updated_at
            ",
        )
        .bind(employee.id)
        .bind(&employee.username)
        .bind(&employee.email)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(role_to_str(employee.role))
        .bind(employee.is_active)
        .bind(new_password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation_on(e, employee_conflict))?;

        row.map(Employee::from)
            .ok_or(DomainError::EmployeeNotFound(employee.id))
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn record_login(&self, id: i64, at: DateTime<Utc>) -> RepoResult<()> {
        sqlx::query("UPDATE employees SET last_login = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
