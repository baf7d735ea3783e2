//! Route definitions for the Paralympics HTTP API.
//!
//! Reads and the account endpoints are public. Every mutation, and `/me`,
//! is wrapped in `require_token`. Public and protected method routers share
//! paths (`GET /regions` vs `POST /regions`) and are merged per path.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(health_routes())
        .merge(account_routes())
        .merge(data_routes())
        .merge(protected_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Liveness and database connectivity
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Registration and token issuance
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

/// Public read endpoints
fn data_routes() -> Router<AppState> {
    Router::new()
        .route("/regions", get(handlers::region::list_regions))
        .route("/regions/{noc}", get(handlers::region::get_region))
        .route("/events", get(handlers::event::list_events))
        .route("/events/{id}", get(handlers::event::get_event))
}

/// Routes behind the token guard
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(handlers::auth::me))
        .route("/regions", post(handlers::region::create_region))
        .route("/regions/{noc}", delete(handlers::region::delete_region))
        .route("/events", post(handlers::event::create_event))
        .route("/events/{id}", delete(handlers::event::delete_event))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_token,
        ))
}
