//! Database models - SQLx-compatible structs for PostgreSQL tables

mod category;
mod customer;
mod employee;
mod menu_item;
mod newsletter;
mod reservation;

pub use category::CategoryModel;
pub use customer::CustomerModel;
pub use employee::EmployeeModel;
pub use menu_item::MenuItemModel;
pub use newsletter::NewsletterSubscriberModel;
pub use reservation::{ReservationDetailsModel, ReservationModel};
