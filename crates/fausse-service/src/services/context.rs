//! Service context - dependency container for services
//!
//! Holds all repositories and the shared helpers services need.

use std::sync::Arc;

use fausse_common::auth::JwtService;
use fausse_core::traits::{
    CategoryRepository, CustomerRepository, EmployeeRepository, MenuItemRepository,
    NewsletterRepository, ReservationRepository,
};
use fausse_core::value_objects::{BookingPolicy, Clock};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories
/// - JWT service for authentication
/// - The clock used to reject past bookings
/// - The booking policy (table pool, window length, party size)
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    category_repo: Arc<dyn CategoryRepository>,
    menu_item_repo: Arc<dyn MenuItemRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,
    newsletter_repo: Arc<dyn NewsletterRepository>,
    employee_repo: Arc<dyn EmployeeRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    clock: Arc<dyn Clock>,
    booking_policy: BookingPolicy,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        menu_item_repo: Arc<dyn MenuItemRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
        newsletter_repo: Arc<dyn NewsletterRepository>,
        employee_repo: Arc<dyn EmployeeRepository>,
        jwt_service: Arc<JwtService>,
        clock: Arc<dyn Clock>,
        booking_policy: BookingPolicy,
    ) -> Self {
        Self {
            category_repo,
            menu_item_repo,
            customer_repo,
            reservation_repo,
            newsletter_repo,
            employee_repo,
            jwt_service,
            clock,
            booking_policy,
        }
    }

    // === Repositories ===

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the menu item repository
    pub fn menu_item_repo(&self) -> &dyn MenuItemRepository {
        self.menu_item_repo.as_ref()
    }

    /// Get the customer repository
    pub fn customer_repo(&self) -> &dyn CustomerRepository {
        self.customer_repo.as_ref()
    }

    /// Get the reservation repository
    pub fn reservation_repo(&self) -> &dyn ReservationRepository {
        self.reservation_repo.as_ref()
    }

    /// Get the newsletter repository
    pub fn newsletter_repo(&self) -> &dyn NewsletterRepository {
        self.newsletter_repo.as_ref()
    }

    /// Get the employee repository
    pub fn employee_repo(&self) -> &dyn EmployeeRepository {
        self.employee_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Get the booking policy
    pub fn booking_policy(&self) -> &BookingPolicy {
        &self.booking_policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("clock", &self.clock)
            .field("booking_policy", &self.booking_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    category_repo: Option<Arc<dyn CategoryRepository>>,
    menu_item_repo: Option<Arc<dyn MenuItemRepository>>,
    customer_repo: Option<Arc<dyn CustomerRepository>>,
    reservation_repo: Option<Arc<dyn ReservationRepository>>,
    newsletter_repo: Option<Arc<dyn NewsletterRepository>>,
    employee_repo: Option<Arc<dyn EmployeeRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    clock: Option<Arc<dyn Clock>>,
    booking_policy: Option<BookingPolicy>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn menu_item_repo(mut self, repo: Arc<dyn MenuItemRepository>) -> Self {
        self.menu_item_repo = Some(repo);
        self
    }

    pub fn customer_repo(mut self, repo: Arc<dyn CustomerRepository>) -> Self {
        self.customer_repo = Some(repo);
        self
    }

    pub fn reservation_repo(mut self, repo: Arc<dyn ReservationRepository>) -> Self {
        self.reservation_repo = Some(repo);
        self
    }

    pub fn newsletter_repo(mut self, repo: Arc<dyn NewsletterRepository>) -> Self {
        self.newsletter_repo = Some(repo);
        self
    }

    pub fn employee_repo(mut self, repo: Arc<dyn EmployeeRepository>) -> Self {
        self.employee_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Defaults to `BookingPolicy::default()` when not set
    pub fn booking_policy(mut self, policy: BookingPolicy) -> Self {
        self.booking_policy = Some(policy);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |name: &str| ServiceError::internal(format!("{name} is required"));

        Ok(ServiceContext::new(
            self.category_repo.ok_or_else(|| missing("category_repo"))?,
            self.menu_item_repo.ok_or_else(|| missing("menu_item_repo"))?,
            self.customer_repo.ok_or_else(|| missing("customer_repo"))?,
            self.reservation_repo.ok_or_else(|| missing("reservation_repo"))?,
            self.newsletter_repo.ok_or_else(|| missing("newsletter_repo"))?,
            self.employee_repo.ok_or_else(|| missing("employee_repo"))?,
            self.jwt_service.ok_or_else(|| missing("jwt_service"))?,
            self.clock.ok_or_else(|| missing("clock"))?,
            self.booking_policy.unwrap_or_default(),
        ))
    }
}
