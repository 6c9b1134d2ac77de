//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! `DATABASE_URL`; they are skipped when it is unset. Each server runs with
//! its clock fixed at 2025-04-05 12:00.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, booking, category, check_test_env, menu_item,
    unique_date, unique_email, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["database"], true);
}

// ============================================================================
// Reservation Tests
// ============================================================================

#[tokio::test]
async fn test_booking_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let email = unique_email("guest");
    let date = unique_date();

    let response = server
        .post("/api/reservations", &booking(&email.to_uppercase(), &date, "19:00", 4))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Thank you for your reservation. We look forward to serving you!"
    );
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["date"], date.as_str());
    assert_eq!(body["time"], "19:00");
    let table = body["table_number"].as_i64().unwrap();
    assert!((1..=30).contains(&table));
    let id = body["reservation_id"].as_i64().unwrap();

    let response = server.get(&format!("/api/reservations/{id}")).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["reservation"]["customer_email"], email.as_str());
    assert_eq!(body["reservation"]["status"], "confirmed");

    for _ in 0..2 {
        let response = server
            .post(&format!("/api/reservations/cancel/{id}"), &json!({}))
            .await
            .unwrap();
        let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body["message"], "Reservation has been canceled");
        assert_eq!(body["status"], "canceled");
    }
}

#[tokio::test]
async fn test_booking_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();

    let mut body = booking(&unique_email("guest"), &unique_date(), "19:00", 2);
    body.as_object_mut().unwrap().remove("guests");
    let response = server.post("/api/reservations", &body).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "Missing required field: guests")
        .await
        .unwrap();

    let body = booking(&unique_email("guest"), "2025-04-04", "19:00", 2);
    let response = server.post("/api/reservations", &body).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "Cannot make reservations in the past")
        .await
        .unwrap();

    let body = booking(&unique_email("guest"), "04/10/2030", "19:00", 2);
    let response = server.post("/api/reservations", &body).await.unwrap();
    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "Invalid date or time format. Use YYYY-MM-DD and HH:MM",
    )
    .await
    .unwrap();

    let response = server.get("/api/reservations/999999999").await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "Reservation not found")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_fully_booked_slot() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let date = unique_date();

    for _ in 0..30 {
        let response = server
            .post("/api/reservations", &booking(&unique_email("full"), &date, "19:00", 2))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    // 20:00 still overlaps every 19:00 booking
    let response = server
        .post("/api/reservations", &booking(&unique_email("full"), &date, "20:00", 2))
        .await
        .unwrap();
    assert_error(
        response,
        StatusCode::CONFLICT,
        "Sorry, we are fully booked for this time slot",
    )
    .await
    .unwrap();

    let check = |time: &str| json!({"date": date, "time": time, "guests": 2});

    let response = server
        .post("/api/reservations/check-availability", &check("19:30"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["available"], false);
    assert_eq!(body["tables_remaining"], 0);

    // 90 minutes later the window is free again
    let response = server
        .post("/api/reservations/check-availability", &check("20:30"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["available"], true);
    assert_eq!(body["tables_remaining"], 30);
}

#[tokio::test]
async fn test_availability_rejects_party_size() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .post(
            "/api/reservations/check-availability",
            &json!({"date": unique_date(), "time": "19:00", "guests": 21}),
        )
        .await
        .unwrap();
    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "Number of guests must be between 1 and 20",
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_update_reservation_email_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let date = unique_date();
    let taken = unique_email("taken");

    let response = server
        .post("/api/reservations", &booking(&taken, &date, "18:00", 2))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/reservations", &booking(&unique_email("mover"), &date, "18:00", 2))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = body["reservation_id"].as_i64().unwrap();

    let response = server
        .put(
            &format!("/api/reservations/{id}"),
            &json!({"customer_email": taken, "guests": 6}),
        )
        .await
        .unwrap();
    assert_error(
        response,
        StatusCode::CONFLICT,
        "Email is already in use by another customer",
    )
    .await
    .unwrap();

    // Nothing was written
    let response = server.get(&format!("/api/reservations/{id}")).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["reservation"]["guests"], 2);

    let response = server
        .put(
            &format!("/api/reservations/{id}"),
            &json!({"guests": 6, "table_number": 12}),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Reservation updated successfully");
    assert_eq!(body["reservation"]["guests"], 6);
    assert_eq!(body["reservation"]["table_number"], 12);
}

// ============================================================================
// Newsletter Tests
// ============================================================================

#[tokio::test]
async fn test_newsletter_state_machine() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let email = unique_email("reader");
    let body = json!({"email": format!("  {}  ", email.to_uppercase())});

    let response = server.post("/api/newsletter/subscribe", &body).await.unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created["message"], "Thank you for subscribing to our newsletter!");
    assert_eq!(created["subscriber"]["email"], email.as_str());

    let response = server.post("/api/newsletter/subscribe", &body).await.unwrap();
    assert_error(
        response,
        StatusCode::CONFLICT,
        "This email is already subscribed to our newsletter",
    )
    .await
    .unwrap();

    let response = server.post("/api/newsletter/unsubscribe", &body).await.unwrap();
    let unsubscribed: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unsubscribed["message"], "You have been successfully unsubscribed");

    let response = server.post("/api/newsletter/unsubscribe", &body).await.unwrap();
    assert_error(
        response,
        StatusCode::NOT_FOUND,
        "This email is not subscribed to our newsletter",
    )
    .await
    .unwrap();

    let response = server.post("/api/newsletter/subscribe", &body).await.unwrap();
    let reactivated: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reactivated["message"], "Your subscription has been reactivated!");
    assert_eq!(reactivated["subscriber"]["id"], created["subscriber"]["id"]);
}

#[tokio::test]
async fn test_subscriber_listing_is_admin_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let manager = server.staff("manager").await.unwrap();
    let admin = server.staff("admin").await.unwrap();

    let response = server
        .get_auth("/api/newsletter/subscribers", &manager.token)
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "Admin privileges required")
        .await
        .unwrap();

    let response = server
        .get_auth("/api/newsletter/subscribers", &admin.token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["subscribers"].is_array());
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login_and_me() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let staff = server.staff("staff").await.unwrap();

    let response = server
        .post(
            "/api/auth/login",
            &json!({"username": staff.username, "password": "wrong-password1"}),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "Invalid credentials")
        .await
        .unwrap();

    let response = server.get_auth("/api/auth/me", &staff.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["id"], staff.id);
    assert_eq!(body["user"]["role"], "staff");
    assert!(body["user"]["last_login"].is_string());
    assert!(body["user"].get("password_hash").is_none());

    let response = server
        .post_auth("/api/auth/logout", &staff.token, &json!({}))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Logged out successfully");
}

#[tokio::test]
async fn test_role_gates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let staff = server.staff("staff").await.unwrap();
    let manager = server.staff("manager").await.unwrap();

    let response = server.get("/api/admin/dashboard").await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "Authentication required")
        .await
        .unwrap();

    let response = server
        .get_auth("/api/admin/dashboard", &staff.token)
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "Manager privileges required")
        .await
        .unwrap();

    let response = server
        .get_auth("/api/admin/dashboard", &manager.token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["stats"]["menu_items"].as_i64().unwrap() >= 0);
    assert!(body["upcoming_reservations"].is_array());

    let response = server
        .get_auth("/api/admin/employees", &manager.token)
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "Admin privileges required")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_deactivated_employee_loses_access() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.staff("admin").await.unwrap();
    let staff = server.staff("staff").await.unwrap();

    let response = server
        .delete_auth(&format!("/api/admin/employees/{}", staff.id), &admin.token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Employee deactivated successfully");
    assert_eq!(body["employee"]["is_active"], false);

    let response = server.get_auth("/api/auth/me", &staff.token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_self_protection() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.staff("admin").await.unwrap();
    let path = format!("/api/admin/employees/{}", admin.id);

    let response = server
        .put_auth(&path, &admin.token, &json!({"is_active": false}))
        .await
        .unwrap();
    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "You cannot deactivate your own account",
    )
    .await
    .unwrap();

    let response = server
        .put_auth(&path, &admin.token, &json!({"role": "staff"}))
        .await
        .unwrap();
    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "You cannot demote yourself from admin",
    )
    .await
    .unwrap();

    let response = server.delete_auth(&path, &admin.token).await.unwrap();
    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "You cannot delete your own account",
    )
    .await
    .unwrap();

    // Still an active admin
    let response = server.get_auth(&path, &admin.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["employee"]["role"], "admin");
    assert_eq!(body["employee"]["is_active"], true);
}

#[tokio::test]
async fn test_create_employee_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.staff("admin").await.unwrap();
    let existing = server.staff("staff").await.unwrap();

    let response = server
        .post_auth(
            "/api/admin/employees",
            &admin.token,
            &json!({
                "username": existing.username,
                "email": unique_email("dup"),
                "password": "Another2025",
                "first_name": "Dup",
                "last_name": "Licate",
                "role": "staff"
            }),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "Username already exists")
        .await
        .unwrap();
}

// ============================================================================
// Menu Tests
// ============================================================================

#[tokio::test]
async fn test_public_menu() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/menu/categories").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["categories"].is_array());

    let response = server.get("/api/menu/items").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["items"].is_array());

    let response = server.get("/api/menu/categories/999999999/items").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_menu_management() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let staff = server.staff("staff").await.unwrap();
    let new_category = category();

    let response = server.post("/api/menu/categories", &new_category).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_auth("/api/menu/categories", &staff.token, &new_category)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body["message"], "Category added successfully");
    let category_id = body["category"]["id"].as_i64().unwrap();

    let response = server
        .post_auth("/api/menu/categories", &staff.token, &new_category)
        .await
        .unwrap();
    assert_error(
        response,
        StatusCode::CONFLICT,
        "A category with this name already exists",
    )
    .await
    .unwrap();

    let response = server
        .post_auth("/api/menu/items", &staff.token, &menu_item(category_id))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body["message"], "Menu item added successfully");
    assert_eq!(body["item"]["available"], true);
    let item_id = body["item"]["id"].as_i64().unwrap();

    let response = server
        .post_auth("/api/menu/items", &staff.token, &menu_item(999_999_999))
        .await
        .unwrap();
    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "Category with ID 999999999 does not exist",
    )
    .await
    .unwrap();

    let category_path = format!("/api/menu/categories/{category_id}");
    let response = server.delete_auth(&category_path, &staff.token).await.unwrap();
    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "Cannot delete category that has 1 menu items. Please reassign or delete those items first.",
    )
    .await
    .unwrap();

    let response = server
        .get(&format!("/api/menu/items?category_id={category_id}"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    let response = server
        .delete_auth(&format!("/api/menu/items/{item_id}"), &staff.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.delete_auth(&category_path, &staff.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Category deleted successfully");
}

// ============================================================================
// Customer Tests
// ============================================================================

#[tokio::test]
async fn test_customer_management() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let staff = server.staff("staff").await.unwrap();
    let admin = server.staff("admin").await.unwrap();
    let email = unique_email("diner");

    let response = server
        .post_auth("/api/customers", &staff.token, &json!({"name": "Diner"}))
        .await
        .unwrap();
    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "Name and email are required fields",
    )
    .await
    .unwrap();

    let response = server
        .post_auth(
            "/api/customers",
            &staff.token,
            &json!({"name": "Diner", "email": email}),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let customer_id = body["customer"]["id"].as_i64().unwrap();

    let response = server
        .post_auth(
            "/api/customers",
            &staff.token,
            &json!({"name": "Other", "email": email.to_uppercase()}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // A booking with the same email reuses the customer
    let response = server
        .post("/api/reservations", &booking(&email, &unique_date(), "12:30", 2))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/customers/{customer_id}");
    let response = server.delete_auth(&path, &staff.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &admin.token).await.unwrap();
    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "Cannot delete customer that has 1 reservations",
    )
    .await
    .unwrap();
}

// ============================================================================
// Staff Reservation Views
// ============================================================================

#[tokio::test]
async fn test_admin_reservation_filters() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let staff = server.staff("staff").await.unwrap();
    let manager = server.staff("manager").await.unwrap();
    let date = unique_date();

    let response = server
        .post("/api/reservations", &booking(&unique_email("filter"), &date, "19:00", 2))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = body["reservation_id"].as_i64().unwrap();

    let response = server
        .get_auth(&format!("/api/admin/reservations?date={date}&status=all"), &staff.token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["count"], 1);
    assert_eq!(body["reservations"][0]["id"], id);

    let response = server
        .get_auth("/api/admin/reservations?date=05-04-2025", &staff.token)
        .await
        .unwrap();
    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "Invalid date format. Use YYYY-MM-DD",
    )
    .await
    .unwrap();

    let path = format!("/api/admin/reservations/{id}");
    let response = server.delete_auth(&path, &staff.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &manager.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Reservation cancelled successfully");

    let response = server
        .get_auth(
            &format!("/api/admin/reservations?date={date}&status=confirmed"),
            &staff.token,
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["count"], 0);
}
