//! Service layer error type
//!
//! Wraps domain and application errors and adds the few failures that only
//! the service layer can detect (missing rows, role requirements, request
//! shape problems).

use fausse_common::AppError;
use fausse_core::{DomainError, EmployeeRole};
use std::fmt;
use thiserror::Error;

/// Failure of a service operation
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error("{resource} not found")]
    NotFound { resource: &'static str, id: String },

    /// The caller's role is below the one required
    #[error("{} privileges required", role_label(.required))]
    PermissionDenied { required: EmployeeRole },

    /// A request that fails a check not tied to one domain rule
    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn role_label(role: &EmployeeRole) -> &'static str {
    match role {
        EmployeeRole::Admin => "Admin",
        _ => "Manager",
    }
}

impl ServiceError {
    pub fn not_found(resource: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn permission_denied(required: EmployeeRole) -> Self {
        Self::PermissionDenied { required }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => e.status_code(),
            Self::App(e) => e.status_code(),
            Self::NotFound { .. } => 404,
            Self::PermissionDenied { .. } => 403,
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::PermissionDenied { required } => match required {
                EmployeeRole::Admin => "ADMIN_REQUIRED",
                _ => "MANAGER_REQUIRED",
            },
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::NotFound { resource, .. } => AppError::NotFound(resource.to_string()),
            ServiceError::PermissionDenied { required } => match required {
                EmployeeRole::Admin => AppError::AdminRequired,
                _ => AppError::ManagerRequired,
            },
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
