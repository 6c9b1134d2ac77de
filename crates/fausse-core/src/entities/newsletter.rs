//! Newsletter subscriber entity

use chrono::{DateTime, Utc};

/// An email on the newsletter list
///
/// The row is never deleted; unsubscribing only clears `is_active` so the
/// address can later be reactivated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSubscriber {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
