//! Authentication extractors
//!
//! Read the bearer token from the `Authorization` header, load the employee
//! it names, and apply the role gates.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use fausse_common::AppError;
use fausse_core::Employee;
use fausse_service::{AccessGate, AuthService};

use crate::response::ApiError;
use crate::state::AppState;

/// Any active employee with a valid access token
#[derive(Debug, Clone)]
pub struct AuthEmployee(pub Employee);

#[async_trait]
impl<S> FromRequestParts<S> for AuthEmployee
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::MissingAuth))?;

        let app_state = AppState::from_ref(state);
        let employee = AuthService::new(app_state.service_context())
            .authenticate(bearer.token())
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected access token");
                e
            })?;

        Ok(Self(employee))
    }
}

async fn gated<S>(parts: &mut Parts, state: &S, gate: AccessGate) -> Result<Employee, ApiError>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    let AuthEmployee(employee) = AuthEmployee::from_request_parts(parts, state).await?;
    gate.check(Some(&employee))?;
    Ok(employee)
}

/// Employee with the manager or admin role
#[derive(Debug, Clone)]
pub struct ManagerEmployee(pub Employee);

#[async_trait]
impl<S> FromRequestParts<S> for ManagerEmployee
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        gated(parts, state, AccessGate::Manager).await.map(Self)
    }
}

/// Employee with the admin role
#[derive(Debug, Clone)]
pub struct AdminEmployee(pub Employee);

#[async_trait]
impl<S> FromRequestParts<S> for AdminEmployee
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        gated(parts, state, AccessGate::Admin).await.map(Self)
    }
}
