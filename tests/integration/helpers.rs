//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use chrono::{Duration, Utc};
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use paralympics_api::{AppState, build_router};
use paralympics_core::config::AppConfig;
use paralympics_database::DatabasePool;
use paralympics_entity::user::NewUser;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: SqlitePool,
    /// Shared state the router was built from
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory database.
    pub async fn new() -> Self {
        let config = AppConfig::from_file("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let db_pool = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database")
            .into_pool();

        paralympics_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(config, db_pool.clone());
        let router = build_router(state.clone());

        Self {
            router,
            db_pool,
            state,
        }
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(&self, email: &str, password: &str) -> i64 {
        let password_hash = self
            .state
            .password_hasher
            .hash_password(password)
            .expect("Failed to hash password");

        self.state
            .user_repo
            .create(&NewUser {
                email: email.to_string(),
                password_hash,
            })
            .await
            .expect("Failed to create test user")
            .id
    }

    /// A token for `user_id` issued now.
    pub fn token_for(&self, user_id: i64) -> String {
        self.state
            .jwt_encoder
            .issue_token(user_id)
            .expect("Failed to issue token")
    }

    /// A token for `user_id` whose lifetime ended a minute ago.
    pub fn expired_token_for(&self, user_id: i64) -> String {
        self.state
            .jwt_encoder
            .issue_token_at(user_id, Utc::now() - Duration::minutes(6))
            .expect("Failed to issue token")
    }

    /// Login and return the issued token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self.request("POST", "/login", Some(body), None).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app.
    ///
    /// `authorization` is sent as the raw header value.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a fully built request to the test app.
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// Write `contents` to `name` inside a per-test temp directory.
pub fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write temp CSV");
    path
}
