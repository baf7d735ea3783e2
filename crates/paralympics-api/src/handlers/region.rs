//! Region handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use paralympics_core::error::{AppError, ErrorKind};
use paralympics_entity::region::Region;

use crate::dto::request::CreateRegionRequest;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::handlers::validate_body;
use crate::state::AppState;

/// GET /regions
pub async fn list_regions(State(state): State<AppState>) -> Result<Json<Vec<Region>>, ApiError> {
    Ok(Json(state.region_repo.find_all().await?))
}

/// GET /regions/{noc}
pub async fn get_region(
    State(state): State<AppState>,
    Path(noc): Path<String>,
) -> Result<Json<Region>, ApiError> {
    let region = state
        .region_repo
        .find_by_noc(&noc)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Region {noc} not found")))?;
    Ok(Json(region))
}

/// POST /regions
pub async fn create_region(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateRegionRequest>,
) -> Result<(StatusCode, Json<Region>), ApiError> {
    validate_body(&req)?;

    let region = Region::from(req);
    state.region_repo.create(&region).await.map_err(|e| match e.kind {
        ErrorKind::Conflict => AppError::conflict(format!("Region {} already exists", region.noc)),
        _ => e,
    })?;

    info!(noc = %region.noc, user_id = user.id, "Region created");
    Ok((StatusCode::CREATED, Json(region)))
}

/// DELETE /regions/{noc}
pub async fn delete_region(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(noc): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !state.region_repo.delete(&noc).await? {
        return Err(AppError::not_found(format!("Region {noc} not found")).into());
    }

    info!(noc = %noc, user_id = user.id, "Region deleted");
    Ok(StatusCode::NO_CONTENT)
}
