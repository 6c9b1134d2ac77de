//! Menu item entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A dish or drink listed under a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub is_featured: bool,
    pub available: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    /// Dietary labels that apply to this item, in display order
    pub fn dietary_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.is_vegan {
            labels.push("vegan");
        }
        if self.is_vegetarian || self.is_vegan {
            labels.push("vegetarian");
        }
        if self.is_gluten_free {
            labels.push("gluten-free");
        }
        labels
    }

    /// Mark the row as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Fields required to insert a menu item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenuItem {
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub is_featured: bool,
    pub available: bool,
    pub display_order: i32,
}
