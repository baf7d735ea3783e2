//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::SqlitePool;

use paralympics_auth::{AuthGuard, JwtDecoder, JwtEncoder, PasswordHasher};
use paralympics_core::config::AppConfig;
use paralympics_database::repositories::{EventRepository, RegionRepository, UserRepository};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db_pool: SqlitePool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Token → user resolution for protected routes
    pub auth_guard: Arc<AuthGuard>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Region repository
    pub region_repo: Arc<RegionRepository>,
    /// Event repository
    pub event_repo: Arc<EventRepository>,
}

impl AppState {
    /// Wires every dependency from configuration and an open pool.
    pub fn new(config: AppConfig, db_pool: SqlitePool) -> Self {
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let auth_guard = Arc::new(AuthGuard::new(jwt_decoder, Arc::clone(&user_repo)));

        Self {
            config: Arc::new(config),
            jwt_encoder,
            password_hasher: Arc::new(PasswordHasher::new()),
            auth_guard,
            user_repo,
            region_repo: Arc::new(RegionRepository::new(db_pool.clone())),
            event_repo: Arc::new(EventRepository::new(db_pool.clone())),
            db_pool,
        }
    }
}
