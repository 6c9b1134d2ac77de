//! Reservation service
//!
//! Guest bookings, availability checks and the staff-side reservation
//! management. Tables are drawn at random from the pool of tables that have
//! no overlapping active booking.

use fausse_core::entities::{
    BookingCustomer, NewBooking, NewCustomer, ReservationFilter, ReservationStatus,
};
use fausse_core::error::DomainError;
use fausse_core::value_objects::{
    parse_date, parse_time_slot, parse_time_slot_value, validate_email_address,
};
use chrono::NaiveDateTime;
use tracing::{debug, info, instrument, warn};

use crate::dto::requests::{require, trim_optional};
use crate::dto::{
    AdminUpdateReservationRequest, AvailabilityRequest, AvailabilityResponse,
    BookingConfirmation, CancellationResponse, CreateReservationRequest, ReservationListQuery,
    ReservationListResponse, ReservationResponse, UpdateReservationRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::newsletter::NewsletterService;

/// Reservation service
pub struct ReservationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReservationService<'a> {
    /// Create a new ReservationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Book a table for a guest
    ///
    /// The guest is matched to an existing customer by email, or a new
    /// customer is created in the same transaction as the reservation. A
    /// newsletter opt-in is honoured after the booking commits; its failure
    /// never fails the booking.
    #[instrument(skip(self, request), fields(date = ?request.date, time = ?request.time, guests = ?request.guests))]
    pub async fn create(
        &self,
        request: CreateReservationRequest,
    ) -> ServiceResult<BookingConfirmation> {
        let name = require(request.name, "name")?.trim().to_string();
        let email = require(request.email, "email")?;
        let date = require(request.date, "date")?;
        let time = require(request.time, "time")?;
        let guests = request
            .guests
            .ok_or_else(|| DomainError::MissingField("guests".to_string()))?;

        let email = email.trim().to_string();
        validate_email_address(&email)?;

        let time_slot = self.future_slot(&date, &time)?;
        let policy = self.ctx.booking_policy();
        policy.check_party_size(guests)?;

        let pool = policy.pool();
        let occupied = self
            .ctx
            .reservation_repo()
            .occupied_tables(&policy.window_at(time_slot))
            .await?;

        if pool.is_full(&occupied) {
            info!(%time_slot, "Booking rejected: fully booked");
            return Err(DomainError::FullyBooked.into());
        }

        let table_number = pool.assign(&occupied, &mut rand::thread_rng());
        let opt_in = request.newsletter_opt_in.unwrap_or(false);

        let customer = match self.ctx.customer_repo().find_by_email(&email).await? {
            Some(existing) => BookingCustomer::Existing(existing.id),
            None => BookingCustomer::New(NewCustomer {
                name,
                email: email.clone(),
                phone: trim_optional(request.phone),
                newsletter_signup: opt_in,
            }),
        };

        let booking = self
            .ctx
            .reservation_repo()
            .create_booking(&NewBooking {
                customer,
                time_slot,
                guests,
                table_number,
                special_requests: trim_optional(request.special_requests),
            })
            .await?;

        if opt_in {
            self.opt_in_to_newsletter(&email).await;
        }

        info!(
            reservation_id = booking.reservation.id,
            customer_id = booking.customer.id,
            customer_created = booking.customer_created,
            table_number,
            "Reservation created"
        );

        Ok(BookingConfirmation::from(&booking))
    }

    /// Check whether a table is free for the given slot
    #[instrument(skip(self, request))]
    pub async fn check_availability(
        &self,
        request: AvailabilityRequest,
    ) -> ServiceResult<AvailabilityResponse> {
        let (Some(date), Some(time), Some(guests)) = (
            trim_optional(request.date),
            trim_optional(request.time),
            request.guests,
        ) else {
            return Err(ServiceError::validation("Date, time and guests are required"));
        };

        let time_slot = self.future_slot(&date, &time)?;
        let policy = self.ctx.booking_policy();
        policy.check_party_size(guests)?;

        let pool = policy.pool();
        let occupied = self
            .ctx
            .reservation_repo()
            .occupied_tables(&policy.window_at(time_slot))
            .await?;

        let available = !pool.is_full(&occupied);
        Ok(AvailabilityResponse {
            available,
            tables_remaining: if available { pool.remaining(&occupied) } else { 0 },
        })
    }

    /// Get a reservation with its customer details
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<ReservationResponse> {
        self.ctx
            .reservation_repo()
            .find_details(id)
            .await?
            .map(ReservationResponse::from)
            .ok_or_else(|| ServiceError::not_found("Reservation", id))
    }

    /// List reservations matching a filter
    #[instrument(skip(self))]
    pub async fn list(&self, filter: ReservationFilter) -> ServiceResult<ReservationListResponse> {
        let reservations: Vec<ReservationResponse> = self
            .ctx
            .reservation_repo()
            .list_details(&filter)
            .await?
            .into_iter()
            .map(ReservationResponse::from)
            .collect();

        Ok(ReservationListResponse {
            count: reservations.len(),
            reservations,
        })
    }

    /// List reservations from raw query parameters
    ///
    /// `status=all` (or no status) lists every status.
    pub async fn list_filtered(
        &self,
        query: ReservationListQuery,
    ) -> ServiceResult<ReservationListResponse> {
        let date = trim_optional(query.date)
            .map(|d| parse_date(&d))
            .transpose()
            .map_err(|_| ServiceError::validation("Invalid date format. Use YYYY-MM-DD"))?;

        let status = match trim_optional(query.status) {
            Some(s) if s.eq_ignore_ascii_case("all") => None,
            Some(s) => Some(s.parse::<ReservationStatus>()?),
            None => None,
        };

        self.list(ReservationFilter { date, status }).await
    }

    /// Staff update of a reservation
    ///
    /// Every field is validated before anything is written. When customer
    /// fields are present the customer and the reservation change in one
    /// transaction.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i64,
        request: UpdateReservationRequest,
    ) -> ServiceResult<ReservationResponse> {
        let mut reservation = self
            .ctx
            .reservation_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Reservation", id))?;

        let policy = self.ctx.booking_policy();

        if let Some(table_number) = request.table_number {
            policy.check_table_number(table_number)?;
            reservation.table_number = table_number;
        }
        if let Some(slot) = trim_optional(request.time_slot) {
            reservation.time_slot = parse_time_slot_value(&slot)?;
        }
        if let Some(guests) = request.guests {
            policy.check_party_size(guests)?;
            reservation.guests = guests;
        }
        if let Some(special_requests) = request.special_requests {
            reservation.special_requests = trim_optional(Some(special_requests));
        }
        if let Some(status) = trim_optional(request.status) {
            reservation.status = status.parse()?;
        }
        reservation.touch();

        let touches_customer = request.customer_name.is_some()
            || request.customer_email.is_some()
            || request.customer_phone.is_some();

        let customer = if touches_customer {
            self.ctx
                .customer_repo()
                .find_by_id(reservation.customer_id)
                .await?
        } else {
            None
        };

        match customer {
            Some(mut customer) => {
                let name = trim_optional(request.customer_name)
                    .unwrap_or_else(|| customer.name.clone());
                let email = match trim_optional(request.customer_email) {
                    Some(email) => {
                        validate_email_address(&email)?;
                        if !customer.has_email(&email) {
                            if let Some(other) =
                                self.ctx.customer_repo().find_by_email(&email).await?
                            {
                                if other.id != customer.id {
                                    return Err(DomainError::CustomerEmailExists.into());
                                }
                            }
                        }
                        email
                    }
                    None => customer.email.clone(),
                };
                let phone = match request.customer_phone {
                    Some(phone) => trim_optional(Some(phone)),
                    None => customer.phone.clone(),
                };
                customer.set_contact(name, email, phone);

                self.ctx
                    .reservation_repo()
                    .update_with_customer(&reservation, &customer)
                    .await?;
            }
            None => {
                if touches_customer {
                    debug!(reservation_id = id, "No customer row; customer fields ignored");
                }
                self.ctx.reservation_repo().update(&reservation).await?;
            }
        }

        info!(reservation_id = id, "Reservation updated");
        self.get(id).await
    }

    /// Admin update, limited to table assignment and status
    #[instrument(skip(self, request))]
    pub async fn admin_update(
        &self,
        id: i64,
        request: AdminUpdateReservationRequest,
    ) -> ServiceResult<ReservationResponse> {
        self.update(
            id,
            UpdateReservationRequest {
                table_number: request.table_number,
                status: request.status,
                ..UpdateReservationRequest::default()
            },
        )
        .await
    }

    /// Cancel a reservation; canceling twice is not an error
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: i64) -> ServiceResult<CancellationResponse> {
        if self.ctx.reservation_repo().find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Reservation", id));
        }

        let reservation = self
            .ctx
            .reservation_repo()
            .set_status(id, ReservationStatus::Canceled)
            .await?;

        info!(reservation_id = id, "Reservation canceled");
        Ok(CancellationResponse {
            reservation_id: reservation.id,
            status: reservation.status,
        })
    }

    fn future_slot(&self, date: &str, time: &str) -> ServiceResult<NaiveDateTime> {
        let slot = parse_time_slot(date, time)?;
        if slot < self.ctx.clock().now() {
            return Err(DomainError::PastTimeSlot.into());
        }
        Ok(slot)
    }

    async fn opt_in_to_newsletter(&self, email: &str) {
        match NewsletterService::new(self.ctx).subscribe(email).await {
            Ok(outcome) => info!(
                subscriber_id = outcome.subscriber().id,
                reactivated = outcome.is_reactivation(),
                "Newsletter opt-in recorded with booking"
            ),
            Err(ServiceError::Domain(DomainError::AlreadySubscribed)) => {
                debug!("Newsletter opt-in: already subscribed");
            }
            Err(e) => warn!(error = %e, "Newsletter opt-in failed; booking kept"),
        }
    }
}
