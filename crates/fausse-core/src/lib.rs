//! # fausse-core
//!
//! Domain layer for the Café Fausse back office: entities, value objects,
//! repository traits and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Booking, BookingCustomer, Category, Customer, Employee, EmployeeRole, MenuItem, NewBooking,
    NewCategory, NewCustomer, NewEmployee, NewMenuItem, NewsletterSubscriber, Reservation,
    ReservationDetails, ReservationFilter, ReservationStatus, UNKNOWN_CUSTOMER_NAME,
};
pub use error::DomainError;
pub use traits::{
    CategoryRepository, CustomerRepository, EmployeeRepository, MenuItemRepository,
    NewsletterRepository, RepoResult, ReservationRepository,
};
pub use value_objects::{
    normalize_email, parse_time_slot, parse_time_slot_value, validate_email_address,
    BookingPolicy, Clock, FixedClock, OccupancyWindow, SystemClock, TablePool,
};
