//! Integration tests for accounts and the token guard.

mod helpers;

use axum::body::Body;
use http::{HeaderValue, Request, StatusCode};

#[tokio::test]
async fn test_missing_header_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body,
        serde_json::json!({"message": "Authentication Token missing"})
    );
}

#[tokio::test]
async fn test_empty_header_counts_as_missing() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/me", None, Some("")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Authentication Token missing");
}

#[tokio::test]
async fn test_non_ascii_header_is_invalid_not_missing() {
    let app = helpers::TestApp::new().await;
    let req = Request::builder()
        .method("GET")
        .uri("/me")
        .header("Authorization", HeaderValue::from_bytes(b"tok\xe9n").unwrap())
        .body(Body::empty())
        .unwrap();

    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body,
        serde_json::json!({"message": "Invalid or missing token."})
    );
}

#[tokio::test]
async fn test_valid_token_reaches_handler() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_test_user("ada@example.com", "correct horse").await;
    let token = app.token_for(user_id);

    let response = app.request("GET", "/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], user_id);
    assert_eq!(response.body["email"], "ada@example.com");
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_bearer_prefix_is_not_stripped() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_test_user("bearer@example.com", "correct horse").await;
    let token = app.token_for(user_id);

    let response = app
        .request("GET", "/me", None, Some(&format!("Bearer {token}")))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid or missing token.");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_test_user("late@example.com", "correct horse").await;
    let token = app.expired_token_for(user_id);

    let response = app.request("GET", "/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid or missing token.");
}

#[tokio::test]
async fn test_token_for_deleted_user_is_rejected() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_test_user("gone@example.com", "correct horse").await;
    let token = app.token_for(user_id);
    app.state.user_repo.delete(user_id).await.unwrap();

    let response = app.request("GET", "/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid or missing token.");
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/me", None, Some("not-a-token")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid or missing token.");
}

#[tokio::test]
async fn test_rejected_mutation_has_no_effect() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/regions",
            Some(serde_json::json!({"NOC": "BRA", "region": "Brazil"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("GET", "/regions/BRA", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_then_login() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "email": "new@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "new@example.com");
    assert!(response.body.get("password_hash").is_none());

    let token = app.login("new@example.com", "password123").await;
    let response = app.request("GET", "/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "new@example.com");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("taken@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "email": "TAKEN@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_short_password_is_invalid() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "email": "short@example.com",
                "password": "short",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("user@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "user@example.com",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Incorrect email or password.");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Incorrect email or password.");
}
