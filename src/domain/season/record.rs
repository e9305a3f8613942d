use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One team's statistics for one season
///
/// Identity is the store-assigned `_id`, never the team name. Nothing
/// prevents two records sharing a name or a (name, year) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct TeamSeasonRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub team: String,
    pub games_played: i64,
    pub win: i64,
    pub draw: i64,
    pub loss: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub points: i64,
    pub year: i64,
}

/// A record that has passed the presence checks and is ready to be stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewTeamSeason {
    pub team: String,
    pub games_played: i64,
    pub win: i64,
    pub draw: i64,
    pub loss: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub points: i64,
    pub year: i64,
}

/// Raw insert payload, every field optional until checked
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamSeasonDraft {
    pub team: Option<String>,
    pub games_played: Option<i64>,
    pub win: Option<i64>,
    pub draw: Option<i64>,
    pub loss: Option<i64>,
    pub goals_for: Option<i64>,
    pub goals_against: Option<i64>,
    pub points: Option<i64>,
    pub year: Option<i64>,
}

impl TryFrom<TeamSeasonDraft> for NewTeamSeason {
    type Error = String;

    /// Every field must be present and truthy: a zero count or an empty
    /// name is treated the same as a missing one.
    fn try_from(draft: TeamSeasonDraft) -> Result<Self, Self::Error> {
        fn required(value: Option<i64>, field: &str) -> Result<i64, String> {
            match value {
                Some(v) if v != 0 => Ok(v),
                _ => Err(format!("{} is required", field)),
            }
        }

        let team = match draft.team {
            Some(team) if !team.is_empty() => team,
            _ => return Err("Team is required".to_string()),
        };

        Ok(Self {
            team,
            games_played: required(draft.games_played, "GamesPlayed")?,
            win: required(draft.win, "Win")?,
            draw: required(draft.draw, "Draw")?,
            loss: required(draft.loss, "Loss")?,
            goals_for: required(draft.goals_for, "GoalsFor")?,
            goals_against: required(draft.goals_against, "GoalsAgainst")?,
            points: required(draft.points, "Points")?,
            year: required(draft.year, "Year")?,
        })
    }
}

/// Partial update: only the supplied fields are replaced
///
/// The team name is the lookup key and is not part of the patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamSeasonPatch {
    pub games_played: Option<i64>,
    pub win: Option<i64>,
    pub draw: Option<i64>,
    pub loss: Option<i64>,
    pub goals_for: Option<i64>,
    pub goals_against: Option<i64>,
    pub points: Option<i64>,
    pub year: Option<i64>,
}

impl TeamSeasonPatch {
    /// Returns true when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
