//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use fausse_service::dto::{HealthResponse, ReadinessResponse};
use serde::Serialize;

use crate::response::Success;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub status: &'static str,
}

/// API banner
///
/// GET /
pub async fn index() -> Success<WelcomeResponse> {
    Success::new(
        "Welcome to Café Fausse API",
        WelcomeResponse { status: "online" },
    )
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Success<HealthResponse> {
    Success::new(
        "Service is healthy",
        HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

/// Readiness check with database ping
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = state.pool().acquire().await.is_ok();

    let (status, message, label) = if db_healthy {
        (StatusCode::OK, "Service is ready", "ready")
    } else {
        tracing::warn!("Readiness check failed: database unavailable");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "Database unavailable",
            "unavailable",
        )
    };

    let body = Success::new(
        message,
        ReadinessResponse {
            status: label.to_string(),
            database: db_healthy,
        },
    );
    (status, body)
}
