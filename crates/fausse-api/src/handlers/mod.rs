//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod admin;
pub mod auth;
pub mod customers;
pub mod health;
pub mod menu;
pub mod newsletter;
pub mod reservations;
