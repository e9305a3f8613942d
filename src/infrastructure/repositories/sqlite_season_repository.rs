use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::domain::repositories::{StoreResult, TeamSeasonRepository};
use crate::domain::season::{
    AverageGoals, NewTeamSeason, SeasonTotals, TeamSeasonPatch, TeamSeasonRecord,
};

const FIND_BY_MIN_WINS_LIMIT: i64 = 10;

/// SQLite implementation of TeamSeasonRepository
///
/// Store order is insertion order (`rowid`). Name matching uses the NOCASE
/// collation, which folds ASCII letters only.
#[derive(Clone)]
pub struct SqliteTeamSeasonRepository {
    pool: SqlitePool,
}

impl SqliteTeamSeasonRepository {
    /// Creates a new SqliteTeamSeasonRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool with the schema applied
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TotalsRow {
    matched: i64,
    total_games_played: i64,
    total_wins: i64,
    total_draw: i64,
}

#[derive(FromRow)]
struct AverageGoalsRow {
    team: String,
    year: i64,
    goals_for: Option<i64>,
    games_played: Option<i64>,
}

#[async_trait]
impl TeamSeasonRepository for SqliteTeamSeasonRepository {
    async fn list_all(&self) -> StoreResult<Vec<TeamSeasonRecord>> {
        let records = sqlx::query_as::<_, TeamSeasonRecord>(
            r#"
            SELECT id, team, games_played, win, draw, loss,
                   goals_for, goals_against, points, year
            FROM team_seasons
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<TeamSeasonRecord>> {
        let record = sqlx::query_as::<_, TeamSeasonRecord>(
            r#"
            SELECT id, team, games_played, win, draw, loss,
                   goals_for, goals_against, points, year
            FROM team_seasons
            WHERE team = ? COLLATE NOCASE
            ORDER BY rowid
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_by_min_wins(&self, threshold: f64) -> StoreResult<Vec<TeamSeasonRecord>> {
        let records = sqlx::query_as::<_, TeamSeasonRecord>(
            r#"
            SELECT id, team, games_played, win, draw, loss,
                   goals_for, goals_against, points, year
            FROM team_seasons
            WHERE win > ?
            ORDER BY rowid
            LIMIT ?
            "#,
        )
        .bind(threshold)
        .bind(FIND_BY_MIN_WINS_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn find_by_year_and_min_goals(
        &self,
        year: f64,
        min_goals: f64,
    ) -> StoreResult<Vec<TeamSeasonRecord>> {
        let records = sqlx::query_as::<_, TeamSeasonRecord>(
            r#"
            SELECT id, team, games_played, win, draw, loss,
                   goals_for, goals_against, points, year
            FROM team_seasons
            WHERE year = ? AND goals_for >= ?
            ORDER BY rowid
            "#,
        )
        .bind(year)
        .bind(min_goals)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn aggregate_totals(&self, year: f64) -> StoreResult<Option<SeasonTotals>> {
        let row = sqlx::query_as::<_, TotalsRow>(
            r#"
            SELECT COUNT(*) AS matched,
                   COALESCE(SUM(games_played), 0) AS total_games_played,
                   COALESCE(SUM(win), 0) AS total_wins,
                   COALESCE(SUM(draw), 0) AS total_draw
            FROM team_seasons
            WHERE year = ?
            "#,
        )
        .bind(year)
        .fetch_one(&self.pool)
        .await?;

        if row.matched == 0 {
            return Ok(None);
        }

        Ok(Some(SeasonTotals {
            total_games_played: row.total_games_played,
            total_wins: row.total_wins,
            total_draw: row.total_draw,
        }))
    }

    async fn aggregate_average_goals(&self, year: f64) -> StoreResult<Vec<AverageGoals>> {
        let rows = sqlx::query_as::<_, AverageGoalsRow>(
            r#"
            SELECT team, year, goals_for, games_played
            FROM team_seasons
            WHERE year = ?
            ORDER BY rowid
            "#,
        )
        .bind(year)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| AverageGoals::new(r.team, r.year, r.goals_for, r.games_played))
            .collect())
    }

    async fn update_by_name(
        &self,
        name: &str,
        patch: &TeamSeasonPatch,
    ) -> StoreResult<Option<TeamSeasonRecord>> {
        if patch.is_empty() {
            return self.find_by_name(name).await;
        }

        let record = sqlx::query_as::<_, TeamSeasonRecord>(
            r#"
            UPDATE team_seasons SET
                games_played = COALESCE(?, games_played),
                win = COALESCE(?, win),
                draw = COALESCE(?, draw),
                loss = COALESCE(?, loss),
                goals_for = COALESCE(?, goals_for),
                goals_against = COALESCE(?, goals_against),
                points = COALESCE(?, points),
                year = COALESCE(?, year)
            WHERE id = (
                SELECT id FROM team_seasons
                WHERE team = ? COLLATE NOCASE
                ORDER BY rowid
                LIMIT 1
            )
            RETURNING id, team, games_played, win, draw, loss,
                      goals_for, goals_against, points, year
            "#,
        )
        .bind(patch.games_played)
        .bind(patch.win)
        .bind(patch.draw)
        .bind(patch.loss)
        .bind(patch.goals_for)
        .bind(patch.goals_against)
        .bind(patch.points)
        .bind(patch.year)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<Option<TeamSeasonRecord>> {
        let record = sqlx::query_as::<_, TeamSeasonRecord>(
            r#"
            DELETE FROM team_seasons
            WHERE id = (
                SELECT id FROM team_seasons
                WHERE team = ? COLLATE NOCASE
                ORDER BY rowid
                LIMIT 1
            )
            RETURNING id, team, games_played, win, draw, loss,
                      goals_for, goals_against, points, year
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn insert(&self, season: &NewTeamSeason) -> StoreResult<TeamSeasonRecord> {
        let record = sqlx::query_as::<_, TeamSeasonRecord>(
            r#"
            INSERT INTO team_seasons (
                id, team, games_played, win, draw, loss,
                goals_for, goals_against, points, year
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, team, games_played, win, draw, loss,
                      goals_for, goals_against, points, year
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&season.team)
        .bind(season.games_played)
        .bind(season.win)
        .bind(season.draw)
        .bind(season.loss)
        .bind(season.goals_for)
        .bind(season.goals_against)
        .bind(season.points)
        .bind(season.year)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }
}
