//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::entities::{
    Booking, Category, Customer, Employee, EmployeeRole, MenuItem, NewBooking, NewCategory,
    NewCustomer, NewEmployee, NewMenuItem, NewsletterSubscriber, Reservation, ReservationDetails,
    ReservationFilter, ReservationStatus,
};
use crate::error::DomainError;
use crate::value_objects::OccupancyWindow;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>>;

    /// Find category by exact name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>>;

    /// List categories by display order, then name
    async fn list(&self) -> RepoResult<Vec<Category>>;

    /// Create a new category
    async fn create(&self, category: &NewCategory) -> RepoResult<Category>;

    /// Update an existing category
    async fn update(&self, category: &Category) -> RepoResult<Category>;

    /// Hard delete a category
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Number of menu items in a category
    async fn item_count(&self, id: i64) -> RepoResult<i64>;

    /// Total number of categories
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Menu Item Repository
// ============================================================================

#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Find item by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<MenuItem>>;

    /// List items, optionally restricted to one category
    async fn list(&self, category_id: Option<i64>) -> RepoResult<Vec<MenuItem>>;

    /// Create a new item
    async fn create(&self, item: &NewMenuItem) -> RepoResult<MenuItem>;

    /// Update an existing item
    async fn update(&self, item: &MenuItem) -> RepoResult<MenuItem>;

    /// Hard delete an item
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Total number of items
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Customer Repository
// ============================================================================

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find customer by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Customer>>;

    /// Find customer by email, ignoring case
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>>;

    /// List customers by name
    async fn list(&self) -> RepoResult<Vec<Customer>>;

    /// Create a new customer
    async fn create(&self, customer: &NewCustomer) -> RepoResult<Customer>;

    /// Update an existing customer
    async fn update(&self, customer: &Customer) -> RepoResult<Customer>;

    /// Hard delete a customer
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Number of reservations owned by a customer
    async fn reservation_count(&self, id: i64) -> RepoResult<i64>;

    /// Total number of customers
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Reservation Repository
// ============================================================================

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Find reservation by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reservation>>;

    /// Find reservation by ID, joined with its customer
    async fn find_details(&self, id: i64) -> RepoResult<Option<ReservationDetails>>;

    /// List reservations ordered by time slot, joined with their customers
    async fn list_details(&self, filter: &ReservationFilter) -> RepoResult<Vec<ReservationDetails>>;

    /// Distinct table numbers held by non-canceled reservations whose window
    /// overlaps `window` (stored windows have the same length)
    async fn occupied_tables(&self, window: &OccupancyWindow) -> RepoResult<BTreeSet<i32>>;

    /// Persist a booking; a new customer and the reservation are written in
    /// one transaction
    async fn create_booking(&self, booking: &NewBooking) -> RepoResult<Booking>;

    /// Update a reservation
    async fn update(&self, reservation: &Reservation) -> RepoResult<Reservation>;

    /// Update a reservation and its customer in one transaction
    async fn update_with_customer(
        &self,
        reservation: &Reservation,
        customer: &Customer,
    ) -> RepoResult<(Reservation, Customer)>;

    /// Set the status of a reservation
    async fn set_status(&self, id: i64, status: ReservationStatus) -> RepoResult<Reservation>;

    /// Number of reservations whose time slot falls on `date`
    async fn count_on(&self, date: NaiveDate) -> RepoResult<i64>;

    /// The next `limit` reservations at or after `from`, joined with customers
    async fn upcoming(&self, from: NaiveDateTime, limit: i64) -> RepoResult<Vec<ReservationDetails>>;
}

// ============================================================================
// Newsletter Repository
// ============================================================================

/// Subscriber writes also update the `newsletter_signup` flag of a customer
/// with the same email, in the same transaction.
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// Find subscriber by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<NewsletterSubscriber>>;

    /// Find subscriber by (normalized) email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<NewsletterSubscriber>>;

    /// List all subscribers, newest first
    async fn list(&self) -> RepoResult<Vec<NewsletterSubscriber>>;

    /// Insert an active subscriber and flag the matching customer
    async fn create(&self, email: &str) -> RepoResult<NewsletterSubscriber>;

    /// Flip the active flag and mirror it on the matching customer
    async fn set_active(&self, id: i64, active: bool) -> RepoResult<NewsletterSubscriber>;

    /// Number of subscriber rows, active or not
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Employee Repository
// ============================================================================

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>>;

    /// Find employee by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Employee>>;

    /// List employees by username
    async fn list(&self) -> RepoResult<Vec<Employee>>;

    /// Check if a username is taken, ignoring `except` (the employee being edited)
    async fn username_exists(&self, username: &str, except: Option<i64>) -> RepoResult<bool>;

    /// Check if an email is taken, ignoring `except`
    async fn email_exists(&self, email: &str, except: Option<i64>) -> RepoResult<bool>;

    /// Whether any active employee has the role
    async fn has_active_with_role(&self, role: EmployeeRole) -> RepoResult<bool>;

    /// Create a new employee
    async fn create(&self, employee: &NewEmployee, password_hash: &str) -> RepoResult<Employee>;

    /// Update an existing employee, replacing the password hash in the same
    /// statement when one is given
    async fn update(
        &self,
        employee: &Employee,
        new_password_hash: Option<&str>,
    ) -> RepoResult<Employee>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Record a successful login
    async fn record_login(&self, id: i64, at: DateTime<Utc>) -> RepoResult<()>;
}
