//! Reservation database models

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::FromRow;

/// Database model for reservations table
#[derive(Debug, Clone, FromRow)]
pub struct ReservationModel {
    pub id: i64,
    pub customer_id: i64,
    pub time_slot: NaiveDateTime,
    pub guests: i32,
    pub table_number: i32,
    pub special_requests: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A reservation row LEFT JOINed with its customer
#[derive(Debug, Clone, FromRow)]
pub struct ReservationDetailsModel {
    #[sqlx(flatten)]
    pub reservation: ReservationModel,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
}
