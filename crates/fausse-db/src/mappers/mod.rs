//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for database rows, plus the string
//! encodings used for enum columns.

mod category;
mod customer;
mod employee;
mod menu_item;
mod newsletter;
mod reservation;

pub use employee::{parse_role, role_to_str};
pub use reservation::{parse_status, status_to_str};
