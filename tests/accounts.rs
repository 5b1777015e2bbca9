mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn creates_and_lists_accounts() {
    let app = TestApp::new();

    let account = app.create("accounts", json!({"username": "testuser"})).await;

    assert_eq!(account["username"], "testuser");
    let (status, page) = app.get("/api/accounts/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["results"], json!([account]));
}

#[tokio::test]
async fn usernames_are_unique() {
    let app = TestApp::new();
    app.create("accounts", json!({"username": "testuser"})).await;
    let other = app.create("accounts", json!({"username": "otheruser"})).await;

    let (status, body) = app.post("/api/accounts/", json!({"username": "testuser"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["username"][0]["code"], "unique");
    assert_eq!(
        body["errors"]["username"][0]["message"],
        "A user with that username already exists."
    );

    let (status, body) = app
        .put(
            &format!("/api/accounts/{}/", other["id"].as_str().unwrap()),
            json!({"username": "testuser"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["username"][0]["code"], "unique");
    assert_eq!(app.total("accounts").await, 2);
}

#[tokio::test]
async fn rejects_invalid_usernames() {
    let app = TestApp::new();

    let (status, body) = app.post("/api/accounts/", json!({"username": "john doe"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["username"][0]["code"], "invalid");
}

#[tokio::test]
async fn cascade_only_touches_the_deleted_accounts_bookings() {
    let app = TestApp::new();
    let mut bookings = Vec::new();
    for username in ["testuser", "otheruser"] {
        let account = app.create("accounts", json!({"username": username})).await;
        let booking = app
            .create(
                "bookings",
                json!({
                    "user": account["id"],
                    "name": username,
                    "no_of_guests": 2,
                    "booking_date": "2024-08-12T19:30:00Z",
                }),
            )
            .await;
        bookings.push((account, booking));
    }

    let (doomed, _) = &bookings[0];
    let (status, _) = app
        .delete(&format!("/api/accounts/{}/", doomed["id"].as_str().unwrap()))
        .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    let survivor = bookings[1].1.clone();
    let (_, page) = app.get("/api/bookings/").await;
    assert_eq!(page["results"], json!([survivor]));
}
