//! Authentication and authorization integration tests
//!
//! Exercises AuthGate through the composed router: 401 for missing or bad
//! credentials, 403 from the admin and owner-or-admin predicates.

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::assertions::*;
use crate::common::{create_test_jwt, request, TestApp};

mod test_jwt_validation {
    use super::*;

    #[tokio::test]
    async fn test_missing_authorization_header() {
        let app = TestApp::new().unwrap();
        let (status, body) = app
            .send(request(Method::GET, "/api/auth/me", None, None))
            .await;
        assert_no_token(status, &body);
    }

    #[tokio::test]
    async fn test_valid_jwt_authentication() {
        let app = TestApp::new().unwrap();
        let token = app.token(7, "farmer");

        let (status, body) = app
            .send(request(Method::GET, "/api/auth/me", Some(&token), None))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": 7, "role": "farmer" }));
    }

    #[tokio::test]
    async fn test_invalid_jwt_token() {
        let app = TestApp::new().unwrap();
        let (status, body) = app
            .send(request(
                Method::GET,
                "/api/auth/me",
                Some("invalid.jwt.token"),
                None,
            ))
            .await;
        assert_invalid_token(status, &body);
    }

    #[tokio::test]
    async fn test_expired_jwt_token() {
        let app = TestApp::new().unwrap();
        let expired = create_test_jwt(&app.config.jwt_secret, 7, "farmer", -3600).unwrap();

        let (status, body) = app
            .send(request(Method::GET, "/api/auth/me", Some(&expired), None))
            .await;
        assert_invalid_token(status, &body);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret() {
        let app = TestApp::new().unwrap();
        let forged = create_test_jwt("S-prime", 1, "admin", 3600).unwrap();

        let (status, body) = app
            .send(request(Method::GET, "/api/users", Some(&forged), None))
            .await;
        assert_invalid_token(status, &body);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_invalid_token() {
        let app = TestApp::new().unwrap();
        let req = axum::http::Request::builder()
            .uri("/api/auth/me")
            .header("authorization", "Basic dXNlcjpwYXNz")
            .body(axum::body::Body::empty())
            .unwrap();

        let (status, body) = app.send(req).await;
        assert_invalid_token(status, &body);
    }

    #[tokio::test]
    async fn test_same_request_same_decision() {
        let app = TestApp::new().unwrap();
        let token = app.token(7, "user");

        let first = app
            .send(request(Method::GET, "/api/users/9", Some(&token), None))
            .await;
        let second = app
            .send(request(Method::GET, "/api/users/9", Some(&token), None))
            .await;
        assert_eq!(first, second);
        assert_not_authorized(first.0, &first.1);
    }
}

mod test_role_permissions {
    use super::*;

    #[tokio::test]
    async fn test_non_admin_cannot_list_users() {
        let app = TestApp::new().unwrap();
        let token = app.token(7, "farmer");

        let (status, body) = app
            .send(request(Method::GET, "/api/users", Some(&token), None))
            .await;
        assert_admin_required(status, &body);
    }

    #[tokio::test]
    async fn test_role_match_is_case_sensitive() {
        let app = TestApp::new().unwrap();
        let token = app.token(1, "Admin");

        let (status, body) = app
            .send(request(Method::GET, "/api/users", Some(&token), None))
            .await;
        assert_admin_required(status, &body);
    }

    #[tokio::test]
    async fn test_owner_cannot_delete_own_account() {
        let app = TestApp::new().unwrap();
        let token = app.token(7, "farmer");

        let (status, body) = app
            .send(request(Method::DELETE, "/api/users/7", Some(&token), None))
            .await;
        assert_admin_required(status, &body);
    }

    #[tokio::test]
    async fn test_user_cannot_read_other_profile() {
        let app = TestApp::new().unwrap();
        let token = app.token(7, "user");

        let (status, body) = app
            .send(request(Method::GET, "/api/users/9", Some(&token), None))
            .await;
        assert_not_authorized(status, &body);
    }

    #[tokio::test]
    async fn test_user_cannot_update_other_profile() {
        let app = TestApp::new().unwrap();
        let token = app.token(7, "user");

        let (status, body) = app
            .send(request(
                Method::PATCH,
                "/api/users/9",
                Some(&token),
                Some(json!({ "name": "Mallory" })),
            ))
            .await;
        assert_not_authorized(status, &body);
    }

    #[tokio::test]
    async fn test_malformed_route_id_fails_closed() {
        let app = TestApp::new().unwrap();
        let token = app.token(7, "user");

        for uri in ["/api/users/7abc", "/api/users/0x7", "/api/users/7.0"] {
            let (status, body) = app
                .send(request(Method::GET, uri, Some(&token), None))
                .await;
            assert_not_authorized(status, &body);
        }
    }

    #[tokio::test]
    async fn test_owner_passes_predicate_and_reaches_validation() {
        let app = TestApp::new().unwrap();
        let token = app.token(7, "user");

        let (status, body) = app
            .send(request(
                Method::PATCH,
                "/api/users/7",
                Some(&token),
                Some(json!({ "location": "" })),
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
