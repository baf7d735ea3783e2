//! Authentication failure taxonomy.

use thiserror::Error;

use paralympics_core::error::{AppError, ErrorKind};

/// Body message when no token was presented.
pub const MISSING_TOKEN_MESSAGE: &str = "Authentication Token missing";

/// Body message for every other rejection. Expired, forged and orphaned
/// tokens are indistinguishable to the caller.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or missing token.";

/// Errors raised while issuing or checking a token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `Authorization` header, or an empty one.
    #[error("Authentication token missing")]
    MissingToken,
    /// Signature is valid but `exp` is in the past.
    #[error("Token expired")]
    ExpiredToken,
    /// Bad signature, wrong algorithm, or not a token at all.
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    /// The token is genuine but its subject no longer exists.
    #[error("User {0} referenced by token not found")]
    UserNotFound(i64),
    /// The claim set could not be signed.
    #[error("Failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
    /// The user lookup itself failed.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl AuthError {
    /// The 401 body message for this error, or `None` if it is a server fault
    /// rather than a rejection.
    pub fn rejection_message(&self) -> Option<&'static str> {
        match self {
            Self::MissingToken => Some(MISSING_TOKEN_MESSAGE),
            Self::ExpiredToken | Self::InvalidToken(_) | Self::UserNotFound(_) => {
                Some(INVALID_TOKEN_MESSAGE)
            }
            Self::Signing(_) | Self::Store(_) => None,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Store(inner) => inner,
            AuthError::Signing(_) => {
                let message = err.to_string();
                AppError::with_source(ErrorKind::Internal, message, err)
            }
            AuthError::MissingToken => AppError::authentication(MISSING_TOKEN_MESSAGE),
            AuthError::ExpiredToken | AuthError::InvalidToken(_) | AuthError::UserNotFound(_) => {
                AppError::authentication(INVALID_TOKEN_MESSAGE)
            }
        }
    }
}
