//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in fausse-core.
//! Each repository handles database operations for a specific domain entity.

mod category;
mod customer;
mod employee;
mod error;
mod menu_item;
mod newsletter;
mod reservation;

pub use category::PgCategoryRepository;
pub use customer::PgCustomerRepository;
pub use employee::PgEmployeeRepository;
pub use menu_item::PgMenuItemRepository;
pub use newsletter::PgNewsletterRepository;
pub use reservation::PgReservationRepository;
