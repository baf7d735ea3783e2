//! Token verification.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use paralympics_core::config::AuthConfig;

use super::claims::Claims;
use crate::error::AuthError;

/// Verifies HS256 tokens and their expiry.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is checked against the exact current time.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            validation,
        }
    }

    /// Verifies the signature and expiry of `token` and returns its claims.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => {
                    debug!("Rejected expired token");
                    AuthError::ExpiredToken
                }
                _ => {
                    debug!(error = %e, "Rejected invalid token");
                    AuthError::InvalidToken(e.to_string())
                }
            })
    }
}
