//! Newsletter subscriber database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for newsletter_subscribers table
#[derive(Debug, Clone, FromRow)]
pub struct NewsletterSubscriberModel {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
