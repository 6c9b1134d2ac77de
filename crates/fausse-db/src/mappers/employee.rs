//! Employee model -> entity mapper

use fausse_core::entities::{Employee, EmployeeRole};

use crate::models::EmployeeModel;

/// Convert the role column to `EmployeeRole`
///
/// Unknown values get the least privileged role.
pub fn parse_role(role: &str) -> EmployeeRole {
    role.parse().unwrap_or(EmployeeRole::Staff)
}

/// Convert `EmployeeRole` to the role column value
pub fn role_to_str(role: EmployeeRole) -> &'static str {
    role.as_str()
}

/// The password hash stays behind; see `EmployeeRepository::get_password_hash`
impl From<EmployeeModel> for Employee {
    fn from(model: EmployeeModel) -> Self {
        Employee {
            id: model.id,
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            role: parse_role(&model.role),
            is_active: model.is_active,
            last_login: model.last_login,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
