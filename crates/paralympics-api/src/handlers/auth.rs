//! Account handlers: register, login, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

use paralympics_core::error::{AppError, ErrorKind};
use paralympics_entity::user::{NewUser, User};

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::TokenResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::handlers::validate_body;
use crate::state::AppState;

/// Shown for an unknown email and for a wrong password alike.
const BAD_CREDENTIALS_MESSAGE: &str = "Incorrect email or password.";

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    validate_body(&req)?;

    let password_hash = state.password_hasher.hash_password(&req.password)?;
    let user = state
        .user_repo
        .create(&NewUser {
            email: req.email,
            password_hash,
        })
        .await
        .map_err(|e| match e.kind {
            ErrorKind::Conflict => AppError::conflict("Email is already registered"),
            _ => e,
        })?;

    info!(user_id = user.id, "User registered");
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    validate_body(&req)?;

    let Some(user) = state.user_repo.find_by_email(&req.email).await? else {
        return Err(AppError::authentication(BAD_CREDENTIALS_MESSAGE).into());
    };

    if !state
        .password_hasher
        .verify_password(&req.password, &user.password_hash)?
    {
        return Err(AppError::authentication(BAD_CREDENTIALS_MESSAGE).into());
    }

    let token = state.jwt_encoder.issue_token(user.id)?;
    info!(user_id = user.id, "User logged in");
    Ok(Json(TokenResponse { token }))
}

/// GET /me
pub async fn me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}
