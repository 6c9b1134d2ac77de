//! Employee entity and role hierarchy

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Staff role. Each role includes the permissions of the ones below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeRole {
    #[default]
    Staff,
    Manager,
    Admin,
}

impl EmployeeRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }

    #[inline]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Manager-level access; admins qualify too
    #[inline]
    pub fn is_manager(self) -> bool {
        matches!(self, Self::Manager | Self::Admin)
    }

    /// Every role has staff-level access
    #[inline]
    pub fn is_staff(self) -> bool {
        true
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "staff" => Ok(Self::Staff),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}

/// Back-office account
///
/// The password hash is not part of the entity; repositories expose it
/// separately for login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: EmployeeRole,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    #[inline]
    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }

    /// Mark the row as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Fields required to insert an employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: EmployeeRole,
}
