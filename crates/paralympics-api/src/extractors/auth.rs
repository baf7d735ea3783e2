//! `CurrentUser` extractor: the user attached by `require_token`.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use paralympics_entity::user::User;

use crate::error::ApiError;
use crate::middleware::auth::{AuthenticatedUser, authorize_headers};
use crate::state::AppState;

/// Extracted authenticated user available in handlers.
///
/// Behind `require_token` this reads the user the middleware attached. On a
/// route without the middleware it runs the same guard itself, so a handler
/// that asks for a user can never be reached anonymously.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl std::ops::Deref for CurrentUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(AuthenticatedUser(user)) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(CurrentUser(user.clone()));
        }

        let user = authorize_headers(state, &parts.headers).await?;
        Ok(CurrentUser(user))
    }
}
