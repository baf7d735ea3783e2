//! The `require_token` route guard.
//!
//! Wraps protected routes. The `Authorization` header value is passed to
//! [`AuthGuard`](paralympics_auth::AuthGuard) as is; on success the stored
//! user is attached to the request as [`AuthenticatedUser`] and the inner
//! handler runs. Otherwise the handler is never invoked.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use paralympics_auth::AuthError;
use paralympics_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The user a request was authorized as. Present only behind `require_token`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Rejects the request with 401 unless it carries a valid token for an
/// existing user.
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authorize_headers(&state, request.headers()).await.map_err(|err| {
        debug!(path = %request.uri().path(), error = %err, "Request rejected by token guard");
        ApiError::from(err)
    })?;

    request.extensions_mut().insert(AuthenticatedUser(user));
    Ok(next.run(request).await)
}

/// Runs the guard over the `Authorization` header of `headers`.
///
/// Only an absent or empty header is a missing token. A header that is
/// present but not visible ASCII cannot be a token and is rejected as invalid.
pub(crate) async fn authorize_headers(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<User, AuthError> {
    let header = match headers.get(AUTHORIZATION) {
        None => None,
        Some(value) => Some(value.to_str().map_err(|_| {
            AuthError::InvalidToken("Authorization header is not visible ASCII".to_string())
        })?),
    };

    state.auth_guard.authorize(header).await
}
