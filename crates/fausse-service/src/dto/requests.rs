//! Request DTOs for API endpoints
//!
//! Bodies whose "required" fields must be reported by name keep those fields
//! optional here and are checked with [`require`]; fixed-shape bodies use
//! `validator` derives.

use fausse_core::DomainError;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Take a required field, treating absent and blank strings alike
pub fn require(value: Option<String>, field: &str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::MissingField(field.to_string())),
    }
}

/// Trim an optional text field, mapping blank to `None`
pub fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// Reservation Requests
// ============================================================================

/// Public booking request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReservationRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<i32>,
    pub phone: Option<String>,
    #[serde(alias = "specialRequests")]
    pub special_requests: Option<String>,
    #[serde(alias = "newsletter_signup")]
    pub newsletter_opt_in: Option<bool>,
}

/// Availability pre-check
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityRequest {
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<i32>,
}

/// Reservation update, including the owning customer's contact fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReservationRequest {
    pub table_number: Option<i32>,
    pub time_slot: Option<String>,
    pub guests: Option<i32>,
    pub special_requests: Option<String>,
    pub status: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
}

/// Staff-side reservation update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminUpdateReservationRequest {
    pub table_number: Option<i32>,
    pub status: Option<String>,
}

/// Staff reservation listing filters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationListQuery {
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// A status name, or `all`
    pub status: Option<String>,
}

// ============================================================================
// Menu Requests
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 50, message = "Category name must be 1-50 characters"))]
    pub name: String,

    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: Option<String>,

    pub display_order: Option<i32>,
}

/// Update category request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 50, message = "Category name must be 1-50 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: Option<String>,

    pub display_order: Option<i32>,
}

/// Create menu item request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMenuItemRequest {
    #[validate(length(min = 1, max = 100, message = "Item name must be 1-100 characters"))]
    pub name: String,

    pub description: Option<String>,

    pub price: Decimal,

    pub category_id: i64,

    #[validate(length(max = 255, message = "Image URL must be at most 255 characters"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_gluten_free: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub available: Option<bool>,
    pub display_order: Option<i32>,
}

/// Update menu item request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMenuItemRequest {
    #[validate(length(min = 1, max = 100, message = "Item name must be 1-100 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub price: Option<Decimal>,

    pub category_id: Option<i64>,

    #[validate(length(max = 255, message = "Image URL must be at most 255 characters"))]
    pub image_url: Option<String>,

    pub is_vegetarian: Option<bool>,
    pub is_vegan: Option<bool>,
    pub is_gluten_free: Option<bool>,
    pub is_featured: Option<bool>,
    pub available: Option<bool>,
    pub display_order: Option<i32>,
}

/// Menu item listing filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemQuery {
    pub category_id: Option<i64>,
}

// ============================================================================
// Newsletter Requests
// ============================================================================

/// Subscribe / unsubscribe body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsletterRequest {
    pub email: Option<String>,
}

/// Admin subscriber update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSubscriberRequest {
    pub is_active: Option<bool>,
}

// ============================================================================
// Customer Requests
// ============================================================================

/// Create customer request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub newsletter_signup: bool,
}

/// Update customer request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub newsletter_signup: Option<bool>,
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Employee login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Employee Requests
// ============================================================================

/// Create employee request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEmployeeRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
}

/// Update employee request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
    pub password: Option<String>,
}
