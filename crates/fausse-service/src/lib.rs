//! # fausse-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AccessGate, AuthService, CustomerService, DashboardService, EmployeeService, MenuService,
    NewsletterService, ReservationService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SubscriptionOutcome,
};
