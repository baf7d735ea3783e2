//! # paralympics-database
//!
//! SQLite connection management, embedded migrations, repository
//! implementations for every entity, and the startup CSV seeder.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;

pub use connection::DatabasePool;
pub use seed::{SeedError, Seeder};
