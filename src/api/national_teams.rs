//! National team endpoints

use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{DomainError, NationalTeam, ServiceAddresses};

/// POST /national-team
pub async fn create_national_team(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<NationalTeam>,
) -> Result<Json<NationalTeam>, ApiError> {
    debug!(nationalteam_id = body.national_team_id, "Creating national team");

    let team = state
        .national_team_service
        .create(body)
        .await
        .map_err(|e| ApiError::from(e).with_path(uri.path()))?;

    Ok(Json(team))
}

/// GET /national-team/{nationalteam_id}
pub async fn get_national_team(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(nationalteam_id): Path<i32>,
) -> Result<Json<NationalTeam>, ApiError> {
    debug!(nationalteam_id, "Getting national team");

    let at_path = |e: DomainError| ApiError::from(e).with_path(uri.path());
    let lookup = state.national_team_service.get(nationalteam_id).map_err(at_path)?;
    let team = lookup.await.map_err(at_path)?;

    Ok(Json(team))
}

/// DELETE /national-team/{nationalteam_id}
pub async fn delete_national_team(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(nationalteam_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    debug!(nationalteam_id, "Deleting national team");

    state
        .national_team_service
        .delete(nationalteam_id)
        .await
        .map_err(|e| ApiError::from(e).with_path(uri.path()))?;

    Ok(StatusCode::OK)
}

/// GET /service-addresses
pub async fn get_service_addresses(State(state): State<AppState>) -> Json<ServiceAddresses> {
    Json(state.service_addresses.as_ref().clone())
}
