//! # paralympics-auth
//!
//! Token-based route protection.
//!
//! ## Modules
//!
//! - `jwt`: HS256 token issuance and verification with a five minute lifetime
//! - `password`: Argon2id password hashing
//! - `guard`: the request guard: header → token → claims → user
//! - `error`: the authentication failure taxonomy

pub mod error;
pub mod guard;
pub mod jwt;
pub mod password;

pub use error::AuthError;
pub use guard::AuthGuard;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
