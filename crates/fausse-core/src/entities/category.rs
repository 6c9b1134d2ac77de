//! Category entity - a section of the menu

use chrono::{DateTime, Utc};

/// Menu category such as "Starters" or "Desserts"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Rename the category
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Replace the description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Move the category in the menu listing
    pub fn set_display_order(&mut self, display_order: i32) {
        self.display_order = display_order;
        self.updated_at = Utc::now();
    }
}

/// Fields required to insert a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
}
