//! Reservation handlers
//!
//! Public booking endpoints. Staff-side views live in [`super::admin`].

use axum::extract::State;
use fausse_core::ReservationFilter;
use fausse_service::dto::{
    AvailabilityRequest, AvailabilityResponse, BookingConfirmation, CancellationResponse,
    CreateReservationRequest, ReservationEnvelope, ReservationListResponse,
    UpdateReservationRequest,
};
use fausse_service::ReservationService;

use crate::extractors::{IdPath, JsonBody};
use crate::response::{ApiResult, Created, Success};
use crate::state::AppState;

/// Book a table
///
/// POST /api/reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateReservationRequest>,
) -> ApiResult<Created<Success<BookingConfirmation>>> {
    let service = ReservationService::new(state.service_context());
    let confirmation = service.create(request).await?;
    Ok(Created(Success::new(
        "Thank you for your reservation. We look forward to serving you!",
        confirmation,
    )))
}

/// Check whether a table is free for a slot
///
/// POST /api/reservations/check-availability
pub async fn check_availability(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AvailabilityRequest>,
) -> ApiResult<Success<AvailabilityResponse>> {
    let service = ReservationService::new(state.service_context());
    let availability = service.check_availability(request).await?;
    let message = if availability.available {
        "Tables are available for this time slot"
    } else {
        "Sorry, we are fully booked for this time slot"
    };
    Ok(Success::new(message, availability))
}

/// List all reservations
///
/// GET /api/reservations, GET /api/reservations/all
pub async fn list_reservations(
    State(state): State<AppState>,
) -> ApiResult<Success<ReservationListResponse>> {
    let service = ReservationService::new(state.service_context());
    let reservations = service.list(ReservationFilter::default()).await?;
    Ok(Success::new("Reservations retrieved", reservations))
}

/// GET /api/reservations/:id
pub async fn get_reservation(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Success<ReservationEnvelope>> {
    let service = ReservationService::new(state.service_context());
    let reservation = service.get(id).await?;
    Ok(Success::new(
        "Reservation retrieved",
        ReservationEnvelope { reservation },
    ))
}

/// Update a reservation and, optionally, its customer's contact details
///
/// PUT /api/reservations/:id
pub async fn update_reservation(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateReservationRequest>,
) -> ApiResult<Success<ReservationEnvelope>> {
    let service = ReservationService::new(state.service_context());
    let reservation = service.update(id, request).await?;
    Ok(Success::new(
        "Reservation updated successfully",
        ReservationEnvelope { reservation },
    ))
}

/// POST /api/reservations/cancel/:id
pub async fn cancel_reservation(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Success<CancellationResponse>> {
    let service = ReservationService::new(state.service_context());
    let cancellation = service.cancel(id).await?;
    Ok(Success::new("Reservation has been canceled", cancellation))
}
