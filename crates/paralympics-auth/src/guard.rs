//! The route guard.
//!
//! A request moves through `token present? → token valid? → user exists?`
//! and is authorized only if every step succeeds. The header value is the
//! token itself; no `Bearer ` prefix is stripped.

use std::sync::Arc;

use tracing::debug;

use paralympics_database::repositories::UserRepository;
use paralympics_entity::user::User;

use crate::error::AuthError;
use crate::jwt::JwtDecoder;

/// Resolves the `Authorization` header of a request to a stored user.
#[derive(Debug, Clone)]
pub struct AuthGuard {
    decoder: Arc<JwtDecoder>,
    users: Arc<UserRepository>,
}

impl AuthGuard {
    /// Creates a guard from a decoder and the user store.
    pub fn new(decoder: Arc<JwtDecoder>, users: Arc<UserRepository>) -> Self {
        Self { decoder, users }
    }

    /// Checks the raw `Authorization` header value.
    ///
    /// Returns the authenticated user, or the first failed step.
    pub async fn authorize(&self, authorization: Option<&str>) -> Result<User, AuthError> {
        let token = authorization
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = self.decoder.decode_token(token)?;

        match self.users.find_by_id(claims.user_id()).await? {
            Some(user) => Ok(user),
            None => {
                debug!(user_id = claims.user_id(), "Token subject no longer exists");
                Err(AuthError::UserNotFound(claims.user_id()))
            }
        }
    }
}
