//! Token issuance.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use paralympics_core::config::AuthConfig;

use super::claims::Claims;
use crate::error::AuthError;

/// Lifetime of every issued token.
pub const TOKEN_TTL_MINUTES: i64 = 5;

/// Signs claim sets with HMAC-SHA256.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("algorithm", &Algorithm::HS256)
            .field("ttl_minutes", &TOKEN_TTL_MINUTES)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret_key.as_bytes()),
        }
    }

    /// Issues a token for `user_id`, valid for five minutes from now.
    pub fn issue_token(&self, user_id: i64) -> Result<String, AuthError> {
        self.issue_token_at(user_id, Utc::now())
    }

    /// Issues a token as if it had been created at `issued_at`.
    pub fn issue_token_at(
        &self,
        user_id: i64,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let expires_at = issued_at + Duration::minutes(TOKEN_TTL_MINUTES);
        let claims = Claims {
            sub: user_id,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(AuthError::Signing)
    }
}
