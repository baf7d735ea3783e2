//! Repository implementations for all entities.

pub mod event;
pub mod region;
pub mod user;

pub use event::EventRepository;
pub use region::RegionRepository;
pub use user::UserRepository;

use paralympics_core::error::{AppError, ErrorKind};

/// Map a sqlx error to `AppError`, turning unique-key violations into conflicts.
pub(crate) fn map_write_error(e: sqlx::Error, context: &str) -> AppError {
    let is_unique = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());
    if is_unique {
        AppError::with_source(ErrorKind::Conflict, format!("{context}: already exists"), e)
    } else {
        AppError::with_source(ErrorKind::Database, context.to_string(), e)
    }
}
