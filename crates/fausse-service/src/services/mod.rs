//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod access;
pub mod auth;
pub mod context;
pub mod customer;
pub mod dashboard;
pub mod employee;
pub mod error;
pub mod menu;
pub mod newsletter;
pub mod reservation;

// Re-export all services for convenience
pub use access::AccessGate;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use customer::CustomerService;
pub use dashboard::DashboardService;
pub use employee::EmployeeService;
pub use error::{ServiceError, ServiceResult};
pub use menu::MenuService;
pub use newsletter::{NewsletterService, SubscriptionOutcome};
pub use reservation::ReservationService;
