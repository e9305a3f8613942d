use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::season::{NewTeamSeason, TeamSeasonDraft, TeamSeasonPatch, TeamSeasonRecord};

/// Request body for updating a team looked up by the `Team` field
#[derive(Debug, Deserialize)]
pub struct UpdateTeamRequest {
    #[serde(rename = "Team")]
    pub team: Option<String>,
    #[serde(flatten)]
    pub patch: TeamSeasonPatch,
}

/// Response from a successful update
#[derive(Debug, Serialize)]
pub struct UpdateTeamResponse {
    pub message: String,
    #[serde(rename = "updatedTeam")]
    pub updated_team: TeamSeasonRecord,
}

/// Response from a successful delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response from a successful insert
#[derive(Debug, Serialize)]
pub struct AddTeamResponse {
    pub success: bool,
    pub product: TeamSeasonRecord,
}

/// List every record
///
/// GET /alldata
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamSeasonRecord>>, ApiError> {
    let records = state.seasons.list_all().await?;

    Ok(Json(records))
}

/// Get a record by team name, ignoring case
///
/// GET /teams/:name
pub async fn get_team(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TeamSeasonRecord>, ApiError> {
    let record = state
        .seasons
        .find_by_name(&name)
        .await?
        .ok_or_else(|| ApiError::not_found("Team not found."))?;

    Ok(Json(record))
}

/// Update a record named in the request body
///
/// POST /updateTeam
pub async fn update_team(
    State(state): State<AppState>,
    payload: Result<Json<UpdateTeamRequest>, JsonRejection>,
) -> Result<Json<UpdateTeamResponse>, ApiError> {
    let Json(req) = payload?;

    let name = match req.team {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::bad_request("Team name is required.")),
    };

    apply_update(&state, &name, &req.patch).await
}

/// Update a record named in the path
///
/// PUT /teams/update/:name
pub async fn update_team_by_path(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<TeamSeasonPatch>, JsonRejection>,
) -> Result<Json<UpdateTeamResponse>, ApiError> {
    let Json(patch) = payload?;

    apply_update(&state, &name, &patch).await
}

async fn apply_update(
    state: &AppState,
    name: &str,
    patch: &TeamSeasonPatch,
) -> Result<Json<UpdateTeamResponse>, ApiError> {
    let updated_team = state
        .seasons
        .update_by_name(name, patch)
        .await
        .map_err(|e| ApiError::store("Error updating team", e))?
        .ok_or_else(|| ApiError::not_found(format!("Team '{}' not found.", name)))?;

    tracing::info!(team = %updated_team.team, id = %updated_team.id, "Team season updated");

    Ok(Json(UpdateTeamResponse {
        message: "Team updated successfully!".to_string(),
        updated_team,
    }))
}

/// Delete a record by team name, ignoring case
///
/// DELETE /teams/delete/:name
pub async fn delete_team(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state
        .seasons
        .delete_by_name(&name)
        .await?
        .ok_or_else(|| ApiError::not_found("Team not found. Deletion failed."))?;

    tracing::info!(team = %deleted.team, id = %deleted.id, "Team season deleted");

    Ok(Json(MessageResponse {
        message: format!("Team '{}' deleted successfully.", deleted.team),
    }))
}

/// Add a new record
///
/// POST /addteamdata
pub async fn add_team(
    State(state): State<AppState>,
    payload: Result<Json<TeamSeasonDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<AddTeamResponse>), ApiError> {
    let Json(draft) = payload?;

    let season = NewTeamSeason::try_from(draft)
        .map_err(|e| ApiError::bad_request("Please provide all fields").with_detail(e))?;

    let product = state
        .seasons
        .insert(&season)
        .await
        .map_err(|e| ApiError::store("Server error", e))?;

    tracing::info!(team = %product.team, id = %product.id, "Team season added");

    Ok((
        StatusCode::CREATED,
        Json(AddTeamResponse {
            success: true,
            product,
        }),
    ))
}
