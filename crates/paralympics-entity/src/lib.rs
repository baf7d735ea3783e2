//! # paralympics-entity
//!
//! Domain entity models for the Paralympics backend. Every struct in this
//! crate represents a database table row or the data needed to insert one.
//! Row types derive `sqlx::FromRow`.

pub mod event;
pub mod region;
pub mod user;

pub use event::{Event, NewEvent};
pub use region::Region;
pub use user::{NewUser, User};
