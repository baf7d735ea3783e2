//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing configuration.
///
/// `secret_key` has no default; a configuration without one fails to load.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Symmetric secret used for HMAC-SHA256 signing and verification.
    pub secret_key: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret_key", &"****")
            .finish()
    }
}
