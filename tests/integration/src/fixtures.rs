//! Test fixtures and data generators
//!
//! Provides reusable request bodies for integration tests. Every generator
//! mixes in a per-run random base so repeated runs against the same
//! database never collide.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};

/// Password given to every employee created by the harness
pub const TEST_PASSWORD: &str = "Fausse2025!";

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

fn run_base() -> u64 {
    static BASE: OnceLock<u64> = OnceLock::new();
    *BASE.get_or_init(|| (uuid::Uuid::new_v4().as_u128() % 1_000_000) as u64 * 1_000)
}

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    run_base() + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A unique email address
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}{}@example.com", unique_suffix())
}

/// A future date (relative to the fixed clock) no other test books on
pub fn unique_date() -> String {
    let base = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap_or_default();
    let offset = i64::try_from(unique_suffix() % 200_000).unwrap_or_default();
    (base + Duration::days(offset)).format("%Y-%m-%d").to_string()
}

/// Booking body for `POST /api/reservations`
pub fn booking(email: &str, date: &str, time: &str, guests: i32) -> Value {
    json!({
        "name": "Integration Guest",
        "email": email,
        "date": date,
        "time": time,
        "guests": guests,
        "phone": "555-0100",
        "special_requests": "Window seat"
    })
}

/// Category body for `POST /api/menu/categories`
pub fn category() -> Value {
    json!({
        "name": format!("Category {}", unique_suffix()),
        "description": "Created by the integration suite",
        "display_order": 99
    })
}

/// Menu item body for `POST /api/menu/items`
pub fn menu_item(category_id: i64) -> Value {
    json!({
        "name": format!("Dish {}", unique_suffix()),
        "description": "Seasonal",
        "price": 18.5,
        "category_id": category_id,
        "is_vegetarian": true
    })
}
