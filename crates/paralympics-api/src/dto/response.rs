//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed token to send back verbatim in the `Authorization` header.
    pub token: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// `connected` or `unavailable`.
    pub database: String,
    /// Server version.
    pub version: String,
}
