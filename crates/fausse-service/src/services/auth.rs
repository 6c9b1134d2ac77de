//! Authentication service
//!
//! Handles employee login, token refresh, bearer-token authentication and
//! logout. Tokens are stateless; every authenticated request reloads the
//! employee so deactivation takes effect immediately.

use fausse_common::auth::{verify_password, TokenType};
use fausse_common::AppError;
use fausse_core::entities::Employee;
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, CurrentEmployeeResponse, LoginRequest, RefreshTokenRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with username and password
    ///
    /// The inactive-account check only runs after the password matched, so a
    /// wrong password never reveals whether an account is disabled.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let employee = self
            .ctx
            .employee_repo()
            .find_by_username(request.username.trim())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown username");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .employee_repo()
            .get_password_hash(employee.id)
            .await?
            .ok_or_else(|| {
                warn!(employee_id = employee.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(employee_id = employee.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        if !employee.is_active {
            warn!(employee_id = employee.id, "Login refused: account inactive");
            return Err(ServiceError::App(AppError::InactiveAccount));
        }

        self.ctx
            .employee_repo()
            .record_login(employee.id, Utc::now())
            .await?;

        info!(employee_id = employee.id, role = %employee.role, "Employee logged in");
        self.issue_tokens(employee)
    }

    /// Exchange a refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .verify(&request.refresh_token, TokenType::Refresh)?;

        let employee = self.active_employee(claims.employee_id()?).await?;

        info!(employee_id = employee.id, "Tokens refreshed");
        self.issue_tokens(employee)
    }

    /// Resolve a bearer access token to the active employee it names
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<Employee> {
        let claims = self.ctx.jwt_service().verify(token, TokenType::Access)?;
        self.active_employee(claims.employee_id()?).await
    }

    /// The current employee's profile
    pub fn me(&self, employee: &Employee) -> CurrentEmployeeResponse {
        CurrentEmployeeResponse {
            user: employee.into(),
        }
    }

    /// Logout is an acknowledgement only; tokens simply expire
    pub fn logout(&self, employee: &Employee) {
        info!(employee_id = employee.id, "Employee logged out");
    }

    async fn active_employee(&self, id: i64) -> ServiceResult<Employee> {
        let employee = self
            .ctx
            .employee_repo()
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        if !employee.is_active {
            return Err(ServiceError::App(AppError::InactiveAccount));
        }
        Ok(employee)
    }

    fn issue_tokens(&self, employee: Employee) -> ServiceResult<AuthResponse> {
        let pair = self.ctx.jwt_service().issue(employee.id)?;

        Ok(AuthResponse {
            user: employee.into(),
            token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type,
            expires_in: pair.expires_in,
        })
    }
}
