//! Reservation model -> entity mapper

use fausse_core::entities::{Reservation, ReservationDetails, ReservationStatus};

use crate::models::{ReservationDetailsModel, ReservationModel};

/// Convert the status column to `ReservationStatus`
///
/// The column is CHECK-constrained; anything unexpected reads as confirmed.
pub fn parse_status(status: &str) -> ReservationStatus {
    status.parse().unwrap_or(ReservationStatus::Confirmed)
}

/// Convert `ReservationStatus` to the status column value
pub fn status_to_str(status: ReservationStatus) -> &'static str {
    status.as_str()
}

impl From<ReservationModel> for Reservation {
    fn from(model: ReservationModel) -> Self {
        Reservation {
            id: model.id,
            customer_id: model.customer_id,
            time_slot: model.time_slot,
            guests: model.guests,
            table_number: model.table_number,
            special_requests: model.special_requests,
            status: parse_status(&model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ReservationDetailsModel> for ReservationDetails {
    fn from(model: ReservationDetailsModel) -> Self {
        ReservationDetails {
            reservation: Reservation::from(model.reservation),
            customer_name: model.customer_name,
            customer_email: model.customer_email,
            customer_phone: model.customer_phone,
        }
    }
}
