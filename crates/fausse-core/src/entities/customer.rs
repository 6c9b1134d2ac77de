//! Customer entity - a guest known by email

use chrono::{DateTime, Utc};

/// A guest of the restaurant
///
/// Created lazily the first time an email books a table, or directly by staff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub newsletter_signup: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Case-insensitive email comparison
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }

    /// Update the contact details
    pub fn set_contact(&mut self, name: String, email: String, phone: Option<String>) {
        self.name = name;
        self.email = email;
        self.phone = phone;
        self.updated_at = Utc::now();
    }

    /// Set the newsletter opt-in flag
    pub fn set_newsletter_signup(&mut self, subscribed: bool) {
        self.newsletter_signup = subscribed;
        self.updated_at = Utc::now();
    }
}

/// Fields required to insert a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub newsletter_signup: bool,
}
