//! Event handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use paralympics_core::error::AppError;
use paralympics_entity::event::{Event, NewEvent};

use crate::dto::request::CreateEventRequest;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::handlers::validate_body;
use crate::state::AppState;

/// GET /events
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(state.event_repo.find_all().await?))
}

/// GET /events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Event>, ApiError> {
    let event = state
        .event_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))?;
    Ok(Json(event))
}

/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    validate_body(&req)?;

    let event = state.event_repo.create(&NewEvent::from(req)).await?;

    info!(event_id = event.id, user_id = user.id, "Event created");
    Ok((StatusCode::CREATED, Json(event)))
}

/// DELETE /events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !state.event_repo.delete(id).await? {
        return Err(AppError::not_found(format!("Event {id} not found")).into());
    }

    info!(event_id = id, user_id = user.id, "Event deleted");
    Ok(StatusCode::NO_CONTENT)
}
