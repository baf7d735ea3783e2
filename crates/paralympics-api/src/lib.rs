//! # paralympics-api
//!
//! HTTP API layer for the Paralympics backend built on Axum.
//!
//! Provides the public data endpoints, the account endpoints, the
//! `require_token` middleware guarding mutations, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
