//! Login endpoint integration tests

use axum::http::StatusCode;
use marketdesk_upstream::UpstreamError;
use serde_json::json;

use crate::common::{test_config, TestApp};

mod test_login_success {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_login_returns_identity_and_sets_cookie() {
        let app = TestApp::new();

        let response = app.login("alice", "alice-pw").await;

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
                "message": "Login successful"
            })
        );

        let set_cookie = response.set_cookie().unwrap();
        assert!(set_cookie.starts_with("session="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("SameSite=Lax"));
        assert!(set_cookie.contains("Path=/"));
        assert!(set_cookie.contains("Max-Age=86400"));
        // Development config
        assert!(!set_cookie.contains("Secure"));
    }

    #[tokio::test]
    async fn test_production_cookie_is_secure() {
        let app = TestApp::with_config(test_config(&[("APP_ENV", "production")]));

        let response = app.login("bob", "bob-pw").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.set_cookie().unwrap().contains("Secure"));
    }

    #[tokio::test]
    async fn test_upstream_access_token_not_exposed() {
        let app = TestApp::new();

        let response = app.login("alice", "alice-pw").await;

        assert!(!response.text.contains("access_token"));
        assert!(!response.text.contains("mock-access-token"));
    }
}

mod test_login_failures {
    use super::*;

    #[tokio::test]
    async fn test_empty_username_is_bad_request() {
        let app = TestApp::new();

        let response = app.login("", "x").await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json(),
            json!({ "success": false, "message": "Username and password are required" })
        );
        assert!(response.set_cookie().is_none());
        assert!(app.upstream.attempts().is_empty());
    }

    #[tokio::test]
    async fn test_missing_password_field_is_bad_request() {
        let app = TestApp::new();

        let response = app
            .post_json("/api/auth/login", &json!({ "username": "alice" }), None)
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["message"], "Username and password are required");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = TestApp::new();

        let response = app
            .send(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/api/auth/login")
                    .header("content-type", "application/json")
                    .body(axum::body::Body::from("{not json"))
                    .unwrap(),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["success"], false);
    }

    #[tokio::test]
    async fn test_rejected_credentials_keep_upstream_message() {
        let app = TestApp::new();

        let response = app.login("alice", "wrong").await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.json(),
            json!({ "success": false, "message": "Incorrect username or password" })
        );
        assert!(response.set_cookie().is_none());
        assert_eq!(app.upstream.attempts(), vec!["alice".to_string()]);
    }

    #[tokio::test]
    async fn test_upstream_outage_is_internal_error() {
        let app = TestApp::new();
        app.upstream.set_outage(Some(UpstreamError::Request(
            "connection refused".to_string(),
        )));

        let response = app.login("alice", "alice-pw").await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json()["success"], false);
        // Transport details stay in the logs
        assert!(!response.text.contains("connection refused"));
        assert!(response.set_cookie().is_none());
    }
}
