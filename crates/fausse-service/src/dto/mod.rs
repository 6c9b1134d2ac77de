//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AdminUpdateReservationRequest, AvailabilityRequest, CreateCategoryRequest,
    CreateCustomerRequest, CreateEmployeeRequest, CreateMenuItemRequest, CreateReservationRequest,
    LoginRequest, MenuItemQuery, NewsletterRequest, RefreshTokenRequest, ReservationListQuery,
    UpdateCategoryRequest, UpdateCustomerRequest, UpdateEmployeeRequest, UpdateMenuItemRequest,
    UpdateReservationRequest, UpdateSubscriberRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, AvailabilityResponse, BookingConfirmation, CancellationResponse,
    CategoryEnvelope, CategoryItemsResponse, CategoryListResponse, CategoryResponse,
    CurrentEmployeeResponse, CustomerEnvelope, CustomerListResponse, CustomerResponse,
    DashboardResponse, DashboardStats, EmployeeEnvelope, EmployeeListResponse, EmployeeResponse,
    HealthResponse, MenuItemEnvelope, MenuItemListResponse, MenuItemResponse, ReadinessResponse,
    ReservationEnvelope, ReservationListResponse, ReservationResponse, SubscriberEnvelope,
    SubscriberListResponse, SubscriberResponse, UpcomingReservation,
};
