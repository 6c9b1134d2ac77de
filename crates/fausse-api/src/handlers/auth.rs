//! Authentication handlers
//!
//! Endpoints for employee login, token refresh and session lookups.

use axum::extract::State;
use fausse_service::dto::{
    AuthResponse, CurrentEmployeeResponse, LoginRequest, RefreshTokenRequest,
};
use fausse_service::AuthService;

use crate::extractors::{AuthEmployee, JsonBody, ValidatedJson};
use crate::response::{ApiResult, Empty, Success};
use crate::state::AppState;

/// Login with username and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Success<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Success::new("Login successful", response))
}

/// Exchange a refresh token for a new token pair
///
/// POST /api/auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RefreshTokenRequest>,
) -> ApiResult<Success<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(request).await?;
    Ok(Success::new("Token refreshed", response))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    AuthEmployee(employee): AuthEmployee,
) -> Success<CurrentEmployeeResponse> {
    let service = AuthService::new(state.service_context());
    Success::new("Current employee", service.me(&employee))
}

/// Tokens are stateless; the client discards them
///
/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    AuthEmployee(employee): AuthEmployee,
) -> Success<Empty> {
    AuthService::new(state.service_context()).logout(&employee);
    Success::message("Logged out successfully")
}
