//! Guarded admin shell integration tests

use axum::http::StatusCode;
use chrono::{TimeDelta, Utc};
use serde_json::json;

use crate::common::{admin_user, test_config, TestApp};

#[test_log::test(tokio::test)]
async fn test_admin_role_renders_shell() {
    let app = TestApp::new();
    let cookie = app.login_cookie("alice", "alice-pw").await;

    let response = app.get("/admin/page/list", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "success": true,
            "user": {
                "id": 1,
                "username": "alice",
                "role": "admin",
                "permissions": ["posts:write"]
            },
            "path": "/admin/page/list"
        })
    );

    let root = app.get("/admin", Some(&cookie)).await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(root.json()["path"], "/admin");
}

#[tokio::test]
async fn test_other_role_is_denied_without_redirect() {
    let app = TestApp::new();
    let cookie = app.login_cookie("bob", "bob-pw").await;

    let response = app.get("/admin/page/list", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.location().is_none());
    assert_eq!(
        response.json(),
        json!({ "success": false, "message": "Access denied" })
    );
}

#[tokio::test]
async fn test_invalid_cookie_passes_gate_but_guard_redirects() {
    let app = TestApp::new();

    let response = app.get("/admin/page/list", Some("session=garbage")).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.location().unwrap(),
        "/signin?from=%2Fadmin%2Fpage%2Flist"
    );
}

#[tokio::test]
async fn test_expired_session_redirects() {
    let app = TestApp::new();
    let cookie = app.session_cookie_issued_at(admin_user(), Utc::now() - TimeDelta::days(2));

    let response = app.get("/admin", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location().unwrap(), "/signin?from=%2Fadmin");
}

#[tokio::test]
async fn test_required_role_is_configurable() {
    let app = TestApp::with_config(test_config(&[("ADMIN_REQUIRED_ROLE", "editor")]));
    let cookie = app.login_cookie("alice", "alice-pw").await;

    let response = app.get("/admin", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_logout_then_admin_redirects() {
    let app = TestApp::new();
    let cookie = app.login_cookie("alice", "alice-pw").await;
    let logout = app
        .post_json("/api/auth/logout", &json!({}), Some(&cookie))
        .await;

    let response = app
        .get("/admin", Some(&logout.session_cookie_pair()))
        .await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_files_under_admin_still_guarded() {
    let app = TestApp::new();

    // The gate skips file-like paths; the guard on the admin routes does not
    let response = app.get("/admin/report.pdf", None).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location().unwrap(), "/signin?from=%2Fadmin%2Freport.pdf");
}

#[tokio::test]
async fn test_trailing_slash_root_renders_shell() {
    let app = TestApp::new();
    let cookie = app.login_cookie("alice", "alice-pw").await;

    let response = app.get("/admin/", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["path"], "/admin/");

    let anonymous = app.get("/admin/", None).await;
    assert_eq!(anonymous.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(anonymous.location().unwrap(), "/signin?from=%2Fadmin%2F");
}
