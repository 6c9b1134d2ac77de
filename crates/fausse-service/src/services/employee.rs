//! Employee management service
//!
//! Admin-only CRUD over staff accounts, plus the start-up admin bootstrap.
//! Self-protection rules stop an admin from locking themselves out.

use fausse_common::auth::{hash_password, validate_password_strength};
use fausse_common::BootstrapAdminConfig;
use fausse_core::entities::{Employee, EmployeeRole, NewEmployee};
use fausse_core::error::DomainError;
use fausse_core::value_objects::{normalize_email, validate_email_address};
use tracing::{debug, info, instrument};

use crate::dto::requests::{require, trim_optional};
use crate::dto::{
    CreateEmployeeRequest, EmployeeListResponse, EmployeeResponse, UpdateEmployeeRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Employee service
pub struct EmployeeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EmployeeService<'a> {
    /// Create a new EmployeeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<EmployeeListResponse> {
        let employees: Vec<EmployeeResponse> = self
            .ctx
            .employee_repo()
            .list()
            .await?
            .into_iter()
            .map(EmployeeResponse::from)
            .collect();

        Ok(EmployeeListResponse {
            count: employees.len(),
            employees,
        })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<EmployeeResponse> {
        Ok(self.find(id).await?.into())
    }

    /// Create an employee account; every field is required
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateEmployeeRequest) -> ServiceResult<EmployeeResponse> {
        let username = require(request.username, "username")?.trim().to_string();
        let email = normalize_email(&require(request.email, "email")?);
        let password = require(request.password, "password")?;
        let first_name = require(request.first_name, "first_name")?.trim().to_string();
        let last_name = require(request.last_name, "last_name")?.trim().to_string();
        let role: EmployeeRole = require(request.role, "role")?.parse()?;

        validate_email_address(&email)?;
        validate_password_strength(&password)?;

        if self.ctx.employee_repo().username_exists(&username, None).await? {
            return Err(DomainError::UsernameExists.into());
        }
        if self.ctx.employee_repo().email_exists(&email, None).await? {
            return Err(DomainError::EmployeeEmailExists.into());
        }

        let password_hash =
            hash_password(&password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let employee = self
            .ctx
            .employee_repo()
            .create(
                &NewEmployee {
                    username,
                    email,
                    first_name,
                    last_name,
                    role,
                },
                &password_hash,
            )
            .await?;

        info!(employee_id = employee.id, role = %employee.role, "Employee created");
        Ok(employee.into())
    }

    /// Partial update
    ///
    /// All checks run before the first write, so a rejected update leaves
    /// the account untouched.
    #[instrument(skip(self, caller, request), fields(caller_id = caller.id))]
    pub async fn update(
        &self,
        caller: &Employee,
        id: i64,
        request: UpdateEmployeeRequest,
    ) -> ServiceResult<EmployeeResponse> {
        let mut employee = self.find(id).await?;
        let is_self = caller.id == id;

        if let Some(is_active) = request.is_active {
            if is_self && !is_active {
                return Err(DomainError::CannotDeactivateSelf.into());
            }
            employee.is_active = is_active;
        }

        if let Some(role) = trim_optional(request.role) {
            let role: EmployeeRole = role.parse()?;
            if is_self && employee.role.is_admin() && !role.is_admin() {
                return Err(DomainError::CannotDemoteSelf.into());
            }
            employee.role = role;
        }

        if let Some(username) = trim_optional(request.username) {
            if !username.eq_ignore_ascii_case(&employee.username)
                && self
                    .ctx
                    .employee_repo()
                    .username_exists(&username, Some(id))
                    .await?
            {
                return Err(DomainError::UsernameExists.into());
            }
            employee.username = username;
        }

        if let Some(email) = trim_optional(request.email) {
            let email = normalize_email(&email);
            validate_email_address(&email)?;
            if self.ctx.employee_repo().email_exists(&email, Some(id)).await? {
                return Err(DomainError::EmployeeEmailExists.into());
            }
            employee.email = email;
        }

        if let Some(first_name) = trim_optional(request.first_name) {
            employee.first_name = first_name;
        }
        if let Some(last_name) = trim_optional(request.last_name) {
            employee.last_name = last_name;
        }

        let password_hash = match request.password.filter(|p| !p.is_empty()) {
            Some(password) => {
                validate_password_strength(&password)?;
                Some(hash_password(&password).map_err(|e| ServiceError::internal(e.to_string()))?)
            }
            None => None,
        };

        employee.touch();
        let employee = self
            .ctx
            .employee_repo()
            .update(&employee, password_hash.as_deref())
            .await?;

        info!(
            employee_id = id,
            password_changed = password_hash.is_some(),
            "Employee updated"
        );
        Ok(employee.into())
    }

    /// Deactivate an account; accounts are never hard-deleted
    #[instrument(skip(self, caller), fields(caller_id = caller.id))]
    pub async fn deactivate(&self, caller: &Employee, id: i64) -> ServiceResult<EmployeeResponse> {
        if caller.id == id {
            return Err(DomainError::CannotDeleteSelf.into());
        }

        let mut employee = self.find(id).await?;
        employee.is_active = false;
        employee.touch();

        let employee = self.ctx.employee_repo().update(&employee, None).await?;
        info!(employee_id = id, "Employee deactivated");
        Ok(employee.into())
    }

    /// Create the configured admin when no active admin exists
    ///
    /// Returns the new account, or `None` when nothing had to be done.
    #[instrument(skip(self, config), fields(username = %config.username))]
    pub async fn bootstrap_admin(
        &self,
        config: &BootstrapAdminConfig,
    ) -> ServiceResult<Option<EmployeeResponse>> {
        if self
            .ctx
            .employee_repo()
            .has_active_with_role(EmployeeRole::Admin)
            .await?
        {
            debug!("Active admin present; bootstrap skipped");
            return Ok(None);
        }

        if self
            .ctx
            .employee_repo()
            .username_exists(&config.username, None)
            .await?
        {
            info!("Bootstrap username already taken; bootstrap skipped");
            return Ok(None);
        }

        let employee = self
            .create(CreateEmployeeRequest {
                username: Some(config.username.clone()),
                email: Some(config.email.clone()),
                password: Some(config.password.clone()),
                first_name: Some("Site".to_string()),
                last_name: Some("Administrator".to_string()),
                role: Some(EmployeeRole::Admin.as_str().to_string()),
            })
            .await?;

        info!(employee_id = employee.id, "Bootstrap admin created");
        Ok(Some(employee))
    }

    async fn find(&self, id: i64) -> ServiceResult<Employee> {
        self.ctx
            .employee_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::EmployeeNotFound(id).into())
    }
}
