//! Reservation entity and the booking write model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::customer::{Customer, NewCustomer};
use crate::error::DomainError;
use crate::value_objects::OccupancyWindow;

/// Display name used when a reservation's customer row is missing
pub const UNKNOWN_CUSTOMER_NAME: &str = "Unknown Customer";

/// Lifecycle state of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Canceled,
    Completed,
}

impl ReservationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Canceled => "canceled",
            Self::Completed => "completed",
        }
    }

    /// Whether a reservation in this state holds its table
    pub fn occupies_table(self) -> bool {
        !matches!(self, Self::Canceled)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Ok(Self::Confirmed),
            "canceled" | "cancelled" => Ok(Self::Canceled),
            "completed" => Ok(Self::Completed),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

/// A table booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i64,
    pub customer_id: i64,
    pub time_slot: NaiveDateTime,
    pub guests: i32,
    pub table_number: i32,
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// The interval during which this reservation holds its table
    pub fn window(&self, duration: Duration) -> OccupancyWindow {
        OccupancyWindow::new(self.time_slot, duration)
    }

    /// Whether this reservation still holds its table
    pub fn is_active(&self) -> bool {
        self.status.occupies_table()
    }

    /// Move to a new status
    pub fn set_status(&mut self, status: ReservationStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Cancel the reservation; canceling twice leaves it canceled
    pub fn cancel(&mut self) {
        self.set_status(ReservationStatus::Canceled);
    }

    /// Mark the row as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A reservation joined with its customer's contact details
///
/// The customer fields are `None` when the customer row is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
}

impl ReservationDetails {
    /// Customer name, or a placeholder when the customer is missing
    pub fn display_name(&self) -> &str {
        self.customer_name.as_deref().unwrap_or(UNKNOWN_CUSTOMER_NAME)
    }
}

/// Filters for staff reservation listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReservationFilter {
    pub date: Option<NaiveDate>,
    pub status: Option<ReservationStatus>,
}

/// Who a new booking belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingCustomer {
    /// A customer row that already exists
    Existing(i64),
    /// A customer to insert in the same transaction as the reservation
    New(NewCustomer),
}

/// Everything needed to persist a booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub customer: BookingCustomer,
    pub time_slot: NaiveDateTime,
    pub guests: i32,
    pub table_number: i32,
    pub special_requests: Option<String>,
}

/// A persisted booking: the reservation and the customer it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub reservation: Reservation,
    pub customer: Customer,
    pub customer_created: bool,
}
