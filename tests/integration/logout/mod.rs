//! Logout integration tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();
    let cookie = app.login_cookie("bob", "bob-pw").await;

    let response = app
        .post_json("/api/auth/logout", &json!({}), Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({ "success": true, "message": "Logged out successfully" })
    );

    let set_cookie = response.set_cookie().unwrap();
    assert!(set_cookie.starts_with("session=;"));
    assert!(set_cookie.contains("Max-Age=0"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_logout_without_session_still_succeeds() {
    let app = TestApp::new();

    let first = app.post_json("/api/auth/logout", &json!({}), None).await;
    let second = app.post_json("/api/auth/logout", &json!({}), None).await;

    for response in [first, second] {
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json()["success"], true);
        assert!(response.set_cookie().unwrap().contains("Max-Age=0"));
    }
}

#[tokio::test]
async fn test_cleared_cookie_fails_verification() {
    let app = TestApp::new();
    let cookie = app.login_cookie("bob", "bob-pw").await;

    let logout = app
        .post_json("/api/auth/logout", &json!({}), Some(&cookie))
        .await;
    // What a browser sends after applying the cleared cookie
    let cleared = logout.session_cookie_pair();

    let response = app.get("/api/auth/verify", Some(&cleared)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["message"], "No session found");
}
