//! Axum extractors for request handling
//!
//! Custom extractors for authentication, role gates, path ids, and
//! JSON / query bodies that reject with the API error envelope.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{AdminEmployee, AuthEmployee, ManagerEmployee};
pub use path::IdPath;
pub use query::QueryParams;
pub use validated::{JsonBody, ValidatedJson};
