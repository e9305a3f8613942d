use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::query::parse_number;
use crate::api::state::AppState;
use crate::domain::season::{AverageGoals, SeasonTotals, TeamSeasonRecord};

/// Query string for the wins filter
#[derive(Debug, Deserialize)]
pub struct WinsQuery {
    #[serde(rename = "Win")]
    pub win: Option<String>,
}

/// Query string for the goals filter
#[derive(Debug, Deserialize)]
pub struct GoalsQuery {
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "GoalsFor")]
    pub goals_for: Option<String>,
}

/// Query string for per-season aggregations
#[derive(Debug, Deserialize)]
pub struct YearQuery {
    #[serde(rename = "Year")]
    pub year: Option<String>,
}

/// Season totals in the shape of a grouped aggregation result
#[derive(Debug, Serialize)]
pub struct TotalsResponse {
    #[serde(rename = "_id")]
    pub id: (),
    #[serde(flatten)]
    pub totals: SeasonTotals,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub message: String,
    pub stats: SeasonTotals,
}

#[derive(Debug, Serialize)]
pub struct AverageGoalsResponse {
    pub message: String,
    pub data: Vec<AverageGoals>,
}

/// Teams with more wins than the given value, at most ten
///
/// GET /Win?Win=n
pub async fn teams_by_min_wins(
    State(state): State<AppState>,
    Query(query): Query<WinsQuery>,
) -> Result<Json<Vec<TeamSeasonRecord>>, ApiError> {
    let raw = query.win.unwrap_or_default();
    let threshold = parse_number(&raw)
        .ok_or_else(|| ApiError::bad_request(r#"Please provide a valid "Win" value."#))?;

    let teams = state
        .seasons
        .find_by_min_wins(threshold)
        .await
        .map_err(|e| ApiError::store("Error retrieving records", e))?;

    if teams.is_empty() {
        return Err(ApiError::not_found(format!(
            "No teams found with wins greater than {}.",
            raw
        )));
    }

    Ok(Json(teams))
}

/// Teams of one season that scored at least the given number of goals
///
/// GET /teams-by-goals?Year=y&GoalsFor=g
pub async fn teams_by_goals(
    State(state): State<AppState>,
    Query(query): Query<GoalsQuery>,
) -> Result<Json<Vec<TeamSeasonRecord>>, ApiError> {
    let raw_year = query.year.unwrap_or_default();
    let raw_goals = query.goals_for.unwrap_or_default();

    let (year, min_goals) = match (parse_number(&raw_year), parse_number(&raw_goals)) {
        (Some(year), Some(goals)) => (year, goals),
        _ => return Err(ApiError::bad_request("Provide valid Year and GoalsFor.")),
    };

    let teams = state
        .seasons
        .find_by_year_and_min_goals(year, min_goals)
        .await
        .map_err(|e| ApiError::store("Error retrieving teams.", e))?;

    if teams.is_empty() {
        return Err(ApiError::not_found(format!(
            "No teams found for year {} with goals ≥ {}.",
            raw_year, raw_goals
        )));
    }

    Ok(Json(teams))
}

/// Summed games, wins and draws for one season
///
/// GET /totalsforYear?Year=y
pub async fn season_totals(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> Result<Json<TotalsResponse>, ApiError> {
    let (_, totals) = load_totals(&state, query).await?;

    Ok(Json(TotalsResponse { id: (), totals }))
}

/// Same totals wrapped in a message envelope
///
/// GET /api/football/stats?Year=y
pub async fn season_stats(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> Result<Json<StatsResponse>, ApiError> {
    let (year, stats) = load_totals(&state, query).await?;

    Ok(Json(StatsResponse {
        message: format!("Stats for {}", year),
        stats,
    }))
}

async fn load_totals(state: &AppState, query: YearQuery) -> Result<(String, SeasonTotals), ApiError> {
    let raw = query.year.unwrap_or_default();
    let year = parse_number(&raw).ok_or_else(|| ApiError::bad_request("Provide a valid year."))?;

    let totals = state
        .seasons
        .aggregate_totals(year)
        .await
        .map_err(|e| ApiError::store("Error retrieving totals.", e))?
        .ok_or_else(|| ApiError::not_found(format!("No data found for {}.", raw)))?;

    Ok((raw, totals))
}

/// Goals-per-game for every team of one season
///
/// GET /api/football/averageGoals?Year=y
pub async fn average_goals(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> Result<Json<AverageGoalsResponse>, ApiError> {
    let raw = query.year.unwrap_or_default();
    let year = parse_number(&raw).ok_or_else(|| ApiError::bad_request("Provide a valid year."))?;

    let data = state
        .seasons
        .aggregate_average_goals(year)
        .await
        .map_err(|e| ApiError::store("Error calculating average goals.", e))?;

    if data.is_empty() {
        return Err(ApiError::not_found(format!("No data found for {}.", raw)));
    }

    Ok(Json(AverageGoalsResponse {
        message: format!("Average goals for {}", raw),
        data,
    }))
}
