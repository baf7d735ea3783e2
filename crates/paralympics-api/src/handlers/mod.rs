//! Route handlers organized by domain.

pub mod auth;
pub mod event;
pub mod health;
pub mod region;

use validator::Validate;

use paralympics_core::error::AppError;

/// Run the `validator` rules of a request body.
pub(crate) fn validate_body<T: Validate>(body: &T) -> Result<(), AppError> {
    body.validate()
        .map_err(|e| AppError::validation(format!("Validation failed: {e}")))
}
