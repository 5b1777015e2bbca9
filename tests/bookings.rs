mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{json, Value};

async fn account(app: &TestApp, username: &str) -> String {
    let account = app.create("accounts", json!({"username": username})).await;
    account["id"].as_str().unwrap().to_string()
}

async fn seeded() -> (TestApp, String, Value) {
    let app = TestApp::new();
    let user = account(&app, "testuser").await;
    let booking = app
        .create(
            "bookings",
            json!({
                "user": user,
                "name": "John Doe",
                "no_of_guests": 4,
                "booking_date": "2024-08-12T19:30:00Z",
            }),
        )
        .await;

    (app, user, booking)
}

fn uri(booking: &Value) -> String {
    format!("/api/bookings/{}/", booking["id"].as_str().unwrap())
}

#[tokio::test]
async fn lists_bookings() {
    let (app, _, _) = seeded().await;

    let (status, page) = app.get("/api/bookings/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn retrieves_a_booking() {
    let (app, user, booking) = seeded().await;

    let (status, stored) = app.get(&uri(&booking)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stored,
        json!({
            "id": booking["id"],
            "user": user,
            "name": "John Doe",
            "no_of_guests": 4,
            "booking_date": "2024-08-12T19:30:00Z",
        })
    );
}

#[tokio::test]
async fn creates_a_booking_from_a_naive_date() {
    let (app, user, _) = seeded().await;

    let (status, booking) = app
        .post(
            "/api/bookings/",
            json!({
                "user": user,
                "name": "Jane Smith",
                "no_of_guests": 2,
                "booking_date": "2024-08-19T20:00:00.000000",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(booking["booking_date"], "2024-08-19T20:00:00Z");
    assert_eq!(app.total("bookings").await, 2);
}

#[tokio::test]
async fn rejects_bookings_for_unknown_accounts() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/bookings/",
            json!({
                "user": "01J4ZNOSUCHACCOUNT000000",
                "name": "Jane Smith",
                "no_of_guests": 2,
                "booking_date": "2024-08-19T20:00:00Z",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["user"][0]["code"], "does_not_exist");
    assert_eq!(app.total("bookings").await, 0);
}

#[tokio::test]
async fn reports_invalid_fields() {
    let (app, user, _) = seeded().await;

    let (status, body) = app
        .post(
            "/api/bookings/",
            json!({"user": user, "name": "  ", "booking_date": "tomorrow"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["name"][0]["code"], "blank");
    assert_eq!(body["errors"]["no_of_guests"][0]["code"], "required");
    assert_eq!(body["errors"]["booking_date"][0]["code"], "invalid");
    assert!(body["errors"].get("user").is_none());
}

#[tokio::test]
async fn wrongly_typed_fields_are_reported_by_name() {
    let (app, user, _) = seeded().await;

    let (status, body) = app
        .post(
            "/api/bookings/",
            json!({
                "user": user,
                "name": ["John", "Doe"],
                "no_of_guests": "many",
                "booking_date": "2024-08-12T19:30:00Z",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["name"][0]["code"], "invalid");
    assert_eq!(body["errors"]["no_of_guests"][0]["code"], "invalid");
    assert!(body["errors"].get("non_field_errors").is_none());

    let (status, body) = app
        .post(
            "/api/bookings/",
            json!({
                "user": user,
                "name": "John Doe",
                "no_of_guests": -3_000_000_000i64,
                "booking_date": "2024-08-12T19:30:00Z",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["no_of_guests"][0]["code"], "min_value");
    assert_eq!(app.total("bookings").await, 1);
}

#[tokio::test]
async fn updates_a_booking() {
    let (app, user, booking) = seeded().await;

    let (status, updated) = app
        .put(
            &uri(&booking),
            json!({
                "user": user,
                "name": "Updated Name",
                "no_of_guests": 6,
                "booking_date": "2024-08-26T19:00:00+02:00",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Updated Name");
    assert_eq!(updated["no_of_guests"], 6);
    assert_eq!(updated["booking_date"], "2024-08-26T17:00:00Z");
}

#[tokio::test]
async fn update_cannot_move_a_booking_to_an_unknown_account() {
    let (app, _, booking) = seeded().await;

    let (status, body) = app
        .patch(&uri(&booking), json!({"user": "01J4ZNOSUCHACCOUNT000000"}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["user"][0]["code"], "does_not_exist");
}

#[tokio::test]
async fn partially_updates_a_booking() {
    let (app, _, booking) = seeded().await;

    let (status, updated) = app.patch(&uri(&booking), json!({"no_of_guests": "8"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["no_of_guests"], 8);
    assert_eq!(updated["name"], "John Doe");
    assert_eq!(updated["booking_date"], "2024-08-12T19:30:00Z");
}

#[tokio::test]
async fn deletes_a_booking() {
    let (app, _, booking) = seeded().await;

    let (status, _) = app.delete(&uri(&booking)).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.total("bookings").await, 0);
    assert_eq!(app.get(&uri(&booking)).await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_the_account_deletes_its_bookings() {
    let (app, user, booking) = seeded().await;

    let (status, _) = app.delete(&format!("/api/accounts/{}/", user)).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = app.get(&uri(&booking)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Booking not found");
}
