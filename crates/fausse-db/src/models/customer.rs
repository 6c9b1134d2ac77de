//! Customer database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for customers table
#[derive(Debug, Clone, FromRow)]
pub struct CustomerModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub newsletter_signup: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
