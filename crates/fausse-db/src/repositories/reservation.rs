//! PostgreSQL implementation of ReservationRepository

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::PgPool;
use tracing::{debug, instrument};

use fausse_core::entities::{
    Booking, BookingCustomer, Customer, NewBooking, Reservation, ReservationDetails,
    ReservationFilter, ReservationStatus,
};
use fausse_core::error::DomainError;
use fausse_core::traits::{RepoResult, ReservationRepository};
use fausse_core::value_objects::OccupancyWindow;

use crate::mappers::status_to_str;
use crate::models::{CustomerModel, ReservationDetailsModel, ReservationModel};

use super::error::{map_db_error, map_unique_violation};

const DETAILS_SELECT: &str = r"
    SELECT r.id, r.customer_id, r.time_slot, r.guests, r.table_number, r.special_requests,
           r.status, r.created_at, r.updated_at,
           c.name AS customer_name, c.email AS customer_email, c.phone AS customer_phone
    FROM reservations r
    LEFT JOIN customers c ON c.id = r.customer_id
";

/// PostgreSQL implementation of ReservationRepository
#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reservation>> {
        let result = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, customer_id, time_slot, guests, table_number, special_requests,
                   status, created_at, updated_at
            FROM reservations
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reservation::from))
    }

    #[instrument(skip(self))]
    async fn find_details(&self, id: i64) -> RepoResult<Option<ReservationDetails>> {
        let sql = format!("{DETAILS_SELECT} WHERE r.id = $1");
        let result = sqlx::query_as::<_, ReservationDetailsModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(ReservationDetails::from))
    }

    #[instrument(skip(self))]
    async fn list_details(&self, filter: &ReservationFilter) -> RepoResult<Vec<ReservationDetails>> {
        let sql = format!(
            "{DETAILS_SELECT}
             WHERE ($1::DATE IS NULL OR r.time_slot::DATE = $1)
               AND ($2::TEXT IS NULL OR r.status = $2)
             ORDER BY r.time_slot, r.id"
        );
        let rows = sqlx::query_as::<_, ReservationDetailsModel>(&sql)
            .bind(filter.date)
            .bind(filter.status.map(status_to_str))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ReservationDetails::from).collect())
    }

    #[instrument(skip(self), fields(start = %window.start))]
    async fn occupied_tables(&self, window: &OccupancyWindow) -> RepoResult<BTreeSet<i32>> {
        let (from, to) = window.overlapping_starts();
        let tables = sqlx::query_scalar::<_, i32>(
            r"
            SELECT DISTINCT table_number
            FROM reservations
            WHERE status <> 'canceled'
              AND time_slot > $1
              AND time_slot < $2
            ",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(tables.into_iter().collect())
    }

    #[instrument(skip(self, booking), fields(time_slot = %booking.time_slot, table = booking.table_number))]
    async fn create_booking(&self, booking: &NewBooking) -> RepoResult<Booking> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let (customer, customer_created) = match &booking.customer {
            BookingCustomer::Existing(id) => {
                let customer = sqlx::query_as::<_, CustomerModel>(
                    r"
                    SELECT id, name, email, phone, newsletter_signup, created_at, updated_at
                    FROM customers
                    WHERE id = $1
                    ",
                )
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?
                .ok_or(DomainError::CustomerNotFound(*id))?;
                (Customer::from(customer), false)
            }
            BookingCustomer::New(new_customer) => {
                let customer = sqlx::query_as::<_, CustomerModel>(
                    r"
                    INSERT INTO customers (name, email, phone, newsletter_signup)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, name, email, phone, newsletter_signup, created_at, updated_at
                    ",
                )
                .bind(&new_customer.name)
                .bind(&new_customer.email)
                .bind(&new_customer.phone)
                .bind(new_customer.newsletter_signup)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| map_unique_violation(e, || DomainError::CustomerEmailExists))?;
                (Customer::from(customer), true)
            }
        };

        let reservation = sqlx::query_as::<_, ReservationModel>(
            r"
            INSERT INTO reservations (customer_id, time_slot, guests, table_number, special_requests, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, customer_id, time_slot, guests, table_number, special_requests,
                      status, created_at, updated_at
            ",
        )
        .bind(customer.id)
        .bind(booking.time_slot)
        .bind(booking.guests)
        .bind(booking.table_number)
        .bind(&booking.special_requests)
        .bind(status_to_str(ReservationStatus::Confirmed))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(reservation_id = reservation.id, customer_id = customer.id, "Booking persisted");

        Ok(Booking {
            reservation: Reservation::from(reservation),
            customer,
            customer_created,
        })
    }

    #[instrument(skip(self, reservation), fields(id = reservation.id))]
    async fn update(&self, reservation: &Reservation) -> RepoResult<Reservation> {
        let row = sqlx::query_as::<_, ReservationModel>(
            r"
            UPDATE reservations
            SET time_slot = $2, guests = $3, table_number = $4, special_requests = $5,
                status = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING id, customer_id, time_slot, guests, table_number, special_requests,
                      status, created_at, updated_at
            ",
        )
        .bind(reservation.id)
        .bind(reservation.time_slot)
        .bind(reservation.guests)
        .bind(reservation.table_number)
        .bind(&reservation.special_requests)
        .bind(status_to_str(reservation.status))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Reservation::from)
            .ok_or(DomainError::ReservationNotFound(reservation.id))
    }

    #[instrument(skip(self, reservation, customer), fields(id = reservation.id, customer_id = customer.id))]
    async fn update_with_customer(
        &self,
        reservation: &Reservation,
        customer: &Customer,
    ) -> RepoResult<(Reservation, Customer)> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let customer_row = sqlx::query_as::<_, CustomerModel>(
            r"
            UPDATE customers
            SET name = $2, email = $3, phone = $4, newsletter_signup = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, phone, newsletter_signup, created_at, updated_at
            ",
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.newsletter_signup)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::CustomerEmailExists))?
        .ok_or(DomainError::CustomerNotFound(customer.id))?;

        let reservation_row = sqlx::query_as::<_, ReservationModel>(
            r"
            UPDATE reservations
            SET time_slot = $2, guests = $3, table_number = $4, special_requests = $5,
                status = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING id, customer_id, time_slot, guests, table_number, special_requests,
                      status, created_at, updated_at
            ",
        )
        .bind(reservation.id)
        .bind(reservation.time_slot)
        .bind(reservation.guests)
        .bind(reservation.table_number)
        .bind(&reservation.special_requests)
        .bind(status_to_str(reservation.status))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::ReservationNotFound(reservation.id))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok((Reservation::from(reservation_row), Customer::from(customer_row)))
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: i64, status: ReservationStatus) -> RepoResult<Reservation> {
        let row = sqlx::query_as::<_, ReservationModel>(
            r"
            UPDATE reservations
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, customer_id, time_slot, guests, table_number, special_requests,
                      status, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(status_to_str(status))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Reservation::from)
            .ok_or(DomainError::ReservationNotFound(id))
    }

    #[instrument(skip(self))]
    async fn count_on(&self, date: NaiveDate) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reservations WHERE time_slot::DATE = $1")
            .bind(date)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn upcoming(&self, from: NaiveDateTime, limit: i64) -> RepoResult<Vec<ReservationDetails>> {
        let sql = format!("{DETAILS_SELECT} WHERE r.time_slot >= $1 ORDER BY r.time_slot, r.id LIMIT $2");
        let rows = sqlx::query_as::<_, ReservationDetailsModel>(&sql)
            .bind(from)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ReservationDetails::from).collect())
    }
}
