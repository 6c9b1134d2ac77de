//! Route definitions
//!
//! Resource routes are mounted under `/api`; the banner and health probes
//! live at the root so they can sit outside the rate limiter.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{admin, auth, customers, health, menu, newsletter, reservations};
use crate::response::ApiError;
use crate::state::AppState;

/// Create the API router with all resource routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .fallback(route_not_found)
}

/// Banner and health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(reservation_routes())
        .merge(menu_routes())
        .merge(newsletter_routes())
        .merge(customer_routes())
        .merge(auth_routes())
        .merge(admin_routes())
}

fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route("/reservations/all", get(reservations::list_reservations))
        .route(
            "/reservations/check-availability",
            post(reservations::check_availability),
        )
        .route(
            "/reservations/:id",
            get(reservations::get_reservation).put(reservations::update_reservation),
        )
        .route(
            "/reservations/cancel/:id",
            post(reservations::cancel_reservation),
        )
}

fn menu_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/menu/categories",
            get(menu::list_categories).post(menu::create_category),
        )
        .route(
            "/menu/categories/:id",
            put(menu::update_category).delete(menu::delete_category),
        )
        .route("/menu/categories/:id/items", get(menu::category_items))
        .route("/menu/items", get(menu::list_items).post(menu::create_item))
        .route(
            "/menu/items/:id",
            get(menu::get_item)
                .put(menu::update_item)
                .delete(menu::delete_item),
        )
}

fn newsletter_routes() -> Router<AppState> {
    Router::new()
        .route("/newsletter/subscribe", post(newsletter::subscribe))
        .route("/newsletter/unsubscribe", post(newsletter::unsubscribe))
        .route("/newsletter/subscribers", get(newsletter::list_subscribers))
        .route(
            "/newsletter/subscribers/:id",
            put(newsletter::update_subscriber),
        )
}

fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/customers/:id",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/me", get(auth::me))
        .route("/auth/logout", post(auth::logout))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/dashboard", get(admin::dashboard))
        .route(
            "/admin/employees",
            get(admin::list_employees).post(admin::create_employee),
        )
        .route(
            "/admin/employees/:id",
            get(admin::get_employee)
                .put(admin::update_employee)
                .delete(admin::deactivate_employee),
        )
        .route("/admin/reservations", get(admin::list_reservations))
        .route(
            "/admin/reservations/:id",
            get(admin::get_reservation)
                .put(admin::update_reservation)
                .delete(admin::cancel_reservation),
        )
}
