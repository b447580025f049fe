//! Session verification integration tests

use axum::http::StatusCode;
use chrono::{TimeDelta, Utc};
use serde_json::json;

use crate::common::{admin_user, regular_user, test_config, TestApp};

#[tokio::test]
async fn test_verify_without_cookie() {
    let app = TestApp::new();

    let response = app.get("/api/auth/verify", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json(),
        json!({ "success": false, "message": "No session found" })
    );
}

#[tokio::test]
async fn test_verify_after_login_returns_same_identity() {
    let app = TestApp::new();
    let login = app.login("alice", "alice-pw").await;
    let cookie = login.session_cookie_pair();

    let response = app.get("/api/auth/verify", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["success"], true);
    assert_eq!(response.json()["user"], login.json()["user"]);
}

#[tokio::test]
async fn test_verify_expired_session() {
    let app = TestApp::new();
    let cookie = app.session_cookie_issued_at(regular_user(), Utc::now() - TimeDelta::hours(25));

    let response = app.get("/api/auth/verify", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json(),
        json!({ "success": false, "message": "Invalid session" })
    );
}

#[tokio::test]
async fn test_verify_session_near_end_of_lifetime() {
    let app = TestApp::new();
    let cookie = app.session_cookie_issued_at(regular_user(), Utc::now() - TimeDelta::hours(23));

    let response = app.get("/api/auth/verify", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["user"]["username"], "bob");
}

#[tokio::test]
async fn test_verify_tampered_session() {
    let app = TestApp::new();
    let mut cookie = app.login_cookie("bob", "bob-pw").await;
    // Change one character inside the signature
    let index = cookie.len() - 5;
    let replacement = if &cookie[index..index + 1] == "A" { "B" } else { "A" };
    cookie.replace_range(index..index + 1, replacement);

    let response = app.get("/api/auth/verify", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["message"], "Invalid session");
}

#[tokio::test]
async fn test_verify_rejects_token_from_other_secret() {
    let app = TestApp::new();
    let other = TestApp::with_config(test_config(&[("JWT_SECRET", "some_other_secret")]));
    let foreign_cookie = other.session_cookie_issued_at(admin_user(), Utc::now());

    let response = app.get("/api/auth/verify", Some(&foreign_cookie)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["message"], "Invalid session");
}

#[tokio::test]
async fn test_verify_empty_cookie_counts_as_missing() {
    let app = TestApp::new();

    let response = app.get("/api/auth/verify", Some("session=")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["message"], "No session found");
}
