//! Domain errors - error types for the domain layer
//!
//! The `Display` text of each variant is the message returned to API callers,
//! so it is written for guests and staff rather than for operators.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(i64),

    #[error("Customer with ID {0} not found")]
    CustomerNotFound(i64),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(i64),

    #[error("Subscriber not found: {0}")]
    SubscriberNotFound(i64),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(i64),

    #[error("This email is not subscribed to our newsletter")]
    NotSubscribed,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid date or time format. Use YYYY-MM-DD and HH:MM")]
    InvalidTimeSlot,

    #[error("Cannot make reservations in the past")]
    PastTimeSlot,

    #[error("Number of guests must be between 1 and {max}")]
    InvalidPartySize { max: i32 },

    #[error("Table number must be between 1 and {max}")]
    InvalidTableNumber { max: i32 },

    #[error("Invalid reservation status: {0}")]
    InvalidStatus(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot delete category that has {count} menu items. Please reassign or delete those items first.")]
    CategoryHasItems { count: i64 },

    #[error("Cannot delete customer that has {count} reservations")]
    CustomerHasReservations { count: i64 },

    #[error("You cannot deactivate your own account")]
    CannotDeactivateSelf,

    #[error("You cannot demote yourself from admin")]
    CannotDemoteSelf,

    #[error("You cannot delete your own account")]
    CannotDeleteSelf,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("A category with this name already exists")]
    CategoryNameExists,

    #[error("Email is already in use by another customer")]
    CustomerEmailExists,

    #[error("This email is already subscribed to our newsletter")]
    AlreadySubscribed,

    #[error("Sorry, we are fully booked for this time slot")]
    FullyBooked,

    #[error("Username already exists")]
    UsernameExists,

    #[error("Email already exists")]
    EmployeeEmailExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::MenuItemNotFound(_) => "UNKNOWN_MENU_ITEM",
            Self::CustomerNotFound(_) => "UNKNOWN_CUSTOMER",
            Self::ReservationNotFound(_) => "UNKNOWN_RESERVATION",
            Self::SubscriberNotFound(_) => "UNKNOWN_SUBSCRIBER",
            Self::EmployeeNotFound(_) => "UNKNOWN_EMPLOYEE",
            Self::NotSubscribed => "NOT_SUBSCRIBED",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidTimeSlot => "INVALID_FORMAT",
            Self::PastTimeSlot => "PAST_DATE",
            Self::InvalidPartySize { .. } => "INVALID_PARTY_SIZE",
            Self::InvalidTableNumber { .. } => "INVALID_TABLE_NUMBER",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            // Business Rules
            Self::CategoryHasItems { .. } => "CATEGORY_NOT_EMPTY",
            Self::CustomerHasReservations { .. } => "CUSTOMER_HAS_RESERVATIONS",
            Self::CannotDeactivateSelf => "CANNOT_DEACTIVATE_SELF",
            Self::CannotDemoteSelf => "CANNOT_DEMOTE_SELF",
            Self::CannotDeleteSelf => "CANNOT_DELETE_SELF",

            // Conflict
            Self::CategoryNameExists => "CATEGORY_NAME_EXISTS",
            Self::CustomerEmailExists => "CUSTOMER_EMAIL_EXISTS",
            Self::AlreadySubscribed => "ALREADY_SUBSCRIBED",
            Self::FullyBooked => "FULLY_BOOKED",
            Self::UsernameExists => "USERNAME_EXISTS",
            Self::EmployeeEmailExists => "EMPLOYEE_EMAIL_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CategoryNotFound(_)
                | Self::MenuItemNotFound(_)
                | Self::CustomerNotFound(_)
                | Self::ReservationNotFound(_)
                | Self::SubscriberNotFound(_)
                | Self::EmployeeNotFound(_)
                | Self::NotSubscribed
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingField(_)
                | Self::InvalidEmail
                | Self::InvalidTimeSlot
                | Self::PastTimeSlot
                | Self::InvalidPartySize { .. }
                | Self::InvalidTableNumber { .. }
                | Self::InvalidStatus(_)
                | Self::InvalidRole(_)
                | Self::WeakPassword(_)
        )
    }

    /// Check if this is a business rule violation
    ///
    /// These are reported to callers as bad requests, like validation errors.
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::CategoryHasItems { .. }
                | Self::CustomerHasReservations { .. }
                | Self::CannotDeactivateSelf
                | Self::CannotDemoteSelf
                | Self::CannotDeleteSelf
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::CategoryNameExists
                | Self::CustomerEmailExists
                | Self::AlreadySubscribed
                | Self::FullyBooked
                | Self::UsernameExists
                | Self::EmployeeEmailExists
        )
    }

    /// Check if this error comes from the storage layer or another internal failure
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InternalError(_))
    }

    /// HTTP status for the error's class
    ///
    /// Business rule violations are bad requests, like validation errors.
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_validation() || self.is_business_rule() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }
}
