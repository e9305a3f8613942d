use serde::{Deserialize, Serialize};

/// Summed counters for every record of one season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonTotals {
    pub total_games_played: i64,
    pub total_wins: i64,
    pub total_draw: i64,
}

/// Goals-per-game figure for one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageGoals {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Year")]
    pub year: i64,
    #[serde(rename = "GoalsFor")]
    pub goals_for: Option<i64>,
    #[serde(rename = "GamesPlayed")]
    pub games_played: Option<i64>,
    #[serde(rename = "averageGoalsFor")]
    pub average_goals_for: f64,
}

impl AverageGoals {
    pub fn new(team: String, year: i64, goals_for: Option<i64>, games_played: Option<i64>) -> Self {
        Self {
            team,
            year,
            goals_for,
            games_played,
            average_goals_for: average_goals_for(goals_for, games_played),
        }
    }
}

/// Average goals scored per game played
///
/// # Null Policy
/// - Missing GoalsFor counts as 0
/// - Missing GamesPlayed counts as 1
/// - GamesPlayed of 0 yields 0, never NaN or infinity
pub fn average_goals_for(goals_for: Option<i64>, games_played: Option<i64>) -> f64 {
    let goals = goals_for.unwrap_or(0);
    let games = games_played.unwrap_or(1);

    if games == 0 {
        return 0.0;
    }

    goals as f64 / games as f64
}
