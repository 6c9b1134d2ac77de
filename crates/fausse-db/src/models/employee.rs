//! Employee database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for employees table
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
