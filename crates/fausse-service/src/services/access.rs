//! Role-based access gate
//!
//! Three gates guard the employee-facing endpoints: any authenticated
//! employee, manager-or-above, and admin-only.

use fausse_common::AppError;
use fausse_core::entities::{Employee, EmployeeRole};
use tracing::debug;

use super::error::{ServiceError, ServiceResult};

/// Capability required by a protected operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessGate {
    Authenticated,
    Manager,
    Admin,
}

impl AccessGate {
    /// Role that satisfies this gate
    pub fn required_role(self) -> EmployeeRole {
        match self {
            Self::Authenticated => EmployeeRole::Staff,
            Self::Manager => EmployeeRole::Manager,
            Self::Admin => EmployeeRole::Admin,
        }
    }

    /// Whether an employee with `role` passes the gate
    pub fn allows(self, role: EmployeeRole) -> bool {
        match self {
            Self::Authenticated => role.is_staff(),
            Self::Manager => role.is_manager(),
            Self::Admin => role.is_admin(),
        }
    }

    /// Check a caller against the gate
    ///
    /// No caller (or an inactive one) is a 401; a caller whose role is too
    /// low is a 403.
    pub fn check<'e>(self, caller: Option<&'e Employee>) -> ServiceResult<&'e Employee> {
        let Some(employee) = caller.filter(|e| e.is_active) else {
            return Err(ServiceError::App(AppError::MissingAuth));
        };

        if !self.allows(employee.role) {
            debug!(employee_id = employee.id, role = %employee.role, gate = ?self, "Access denied");
            return Err(ServiceError::permission_denied(self.required_role()));
        }

        Ok(employee)
    }
}
