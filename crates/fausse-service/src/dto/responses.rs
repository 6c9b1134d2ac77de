//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. The API layer
//! flattens them into the `{"success": true, "message": ...}` envelope, so
//! each one is a JSON object keyed the way clients expect.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use fausse_core::entities::{EmployeeRole, ReservationStatus};

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: bool,
}

// ============================================================================
// Menu Responses
// ============================================================================

/// Menu category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
}

/// Menu item
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemResponse {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub is_featured: bool,
    pub available: bool,
    pub display_order: i32,
    pub dietary_labels: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CategoryEnvelope {
    pub category: CategoryResponse,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryResponse>,
}

/// A category together with its items
#[derive(Debug, Serialize)]
pub struct CategoryItemsResponse {
    pub category: CategoryResponse,
    pub items: Vec<MenuItemResponse>,
}

#[derive(Debug, Serialize)]
pub struct MenuItemEnvelope {
    pub item: MenuItemResponse,
}

#[derive(Debug, Serialize)]
pub struct MenuItemListResponse {
    pub items: Vec<MenuItemResponse>,
}

// ============================================================================
// Reservation Responses
// ============================================================================

/// Confirmation returned by a successful booking
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub reservation_id: i64,
    pub table_number: i32,
    pub time_slot: NaiveDateTime,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: String,
    pub time: String,
    pub guests: i32,
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
}

/// Availability pre-check result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub tables_remaining: i32,
}

/// A reservation joined with its customer
#[derive(Debug, Clone, Serialize)]
pub struct ReservationResponse {
    pub id: i64,
    pub reservation_id: i64,
    pub customer_id: i64,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub time_slot: NaiveDateTime,
    pub date: String,
    pub time: String,
    pub guests: i32,
    pub table_number: i32,
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReservationEnvelope {
    pub reservation: ReservationResponse,
}

#[derive(Debug, Serialize)]
pub struct ReservationListResponse {
    pub count: usize,
    pub reservations: Vec<ReservationResponse>,
}

/// Result of a cancellation
#[derive(Debug, Clone, Serialize)]
pub struct CancellationResponse {
    pub reservation_id: i64,
    pub status: ReservationStatus,
}

// ============================================================================
// Newsletter Responses
// ============================================================================

/// Newsletter subscriber
#[derive(Debug, Clone, Serialize)]
pub struct SubscriberResponse {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SubscriberEnvelope {
    pub subscriber: SubscriberResponse,
}

#[derive(Debug, Serialize)]
pub struct SubscriberListResponse {
    pub count: usize,
    pub subscribers: Vec<SubscriberResponse>,
}

// ============================================================================
// Customer Responses
// ============================================================================

/// Customer
#[derive(Debug, Clone, Serialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub newsletter_signup: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CustomerEnvelope {
    pub customer: CustomerResponse,
}

#[derive(Debug, Serialize)]
pub struct CustomerListResponse {
    pub count: usize,
    pub customers: Vec<CustomerResponse>,
}

// ============================================================================
// Employee / Auth Responses
// ============================================================================

/// Employee, without the password hash
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub role: EmployeeRole,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct EmployeeEnvelope {
    pub employee: EmployeeResponse,
}

#[derive(Debug, Serialize)]
pub struct EmployeeListResponse {
    pub count: usize,
    pub employees: Vec<EmployeeResponse>,
}

/// Login / refresh response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: EmployeeResponse,
    pub token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Current employee
#[derive(Debug, Serialize)]
pub struct CurrentEmployeeResponse {
    pub user: EmployeeResponse,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

/// Headline counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub menu_items: i64,
    pub categories: i64,
    pub customers: i64,
    pub newsletter_subscribers: i64,
    pub today_reservations: i64,
}

/// A row of the upcoming reservations panel
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingReservation {
    pub id: i64,
    pub customer_name: String,
    pub date: String,
    pub time: String,
    pub guests: i32,
    pub table_number: i32,
    pub status: ReservationStatus,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub upcoming_reservations: Vec<UpcomingReservation>,
}
