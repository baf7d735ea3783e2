//! Seeding failures.

use std::path::PathBuf;

use thiserror::Error;

use paralympics_core::error::{AppError, ErrorKind};

use super::rows::RowError;

/// Errors that abort seeding. None of them are retried.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A configured CSV file does not exist.
    #[error("Seed file not found: {}", .path.display())]
    FileNotFound {
        /// Missing file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A CSV file exists but could not be opened.
    #[error("Failed to open seed file {}: {source}", .path.display())]
    Io {
        /// Offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The CSV reader could not tokenize the file.
    #[error("Failed to read {}: {source}", .path.display())]
    Csv {
        /// Offending file.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// A row could not be mapped to an entity.
    #[error("{}:{line}: {source}", .path.display())]
    Parse {
        /// Offending file.
        path: PathBuf,
        /// 1-based line number in the file.
        line: u64,
        /// What was wrong with the row.
        #[source]
        source: RowError,
    },
    /// The database rejected a probe, insert or commit.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<SeedError> for AppError {
    fn from(err: SeedError) -> Self {
        match err {
            SeedError::Store(inner) => inner,
            SeedError::FileNotFound { .. } | SeedError::Io { .. } => {
                let message = err.to_string();
                AppError::with_source(ErrorKind::Io, message, err)
            }
            SeedError::Csv { .. } | SeedError::Parse { .. } => {
                let message = err.to_string();
                AppError::with_source(ErrorKind::Validation, message, err)
            }
        }
    }
}
