//! # fausse-api
//!
//! REST API server for the Café Fausse back office, built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{build_service_context, create_app, create_app_state, run, run_server, serve};
pub use state::AppState;
