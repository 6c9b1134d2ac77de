//! Domain entities - core business objects

mod category;
mod customer;
mod employee;
mod menu_item;
mod newsletter;
mod reservation;

pub use category::{Category, NewCategory};
pub use customer::{Customer, NewCustomer};
pub use employee::{Employee, EmployeeRole, NewEmployee};
pub use menu_item::{MenuItem, NewMenuItem};
pub use newsletter::NewsletterSubscriber;
pub use reservation::{
    Booking, BookingCustomer, NewBooking, Reservation, ReservationDetails, ReservationFilter,
    ReservationStatus, UNKNOWN_CUSTOMER_NAME,
};
