//! Email helpers

use validator::ValidateEmail;

use crate::error::DomainError;

/// Trim and lower-case an email address
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Reject addresses that are not syntactically valid
pub fn validate_email_address(email: &str) -> Result<(), DomainError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail)
    }
}
