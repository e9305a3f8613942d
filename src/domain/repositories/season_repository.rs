use async_trait::async_trait;
use thiserror::Error;

use crate::domain::season::{
    AverageGoals, NewTeamSeason, SeasonTotals, TeamSeasonPatch, TeamSeasonRecord,
};

/// Errors raised by a store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository trait for team-season records
///
/// Name lookups are case-insensitive equality, never pattern matches.
/// When several records share a name the earliest stored one is used.
/// Numeric filters take `f64` because query input is parsed as a plain
/// number and compared against integer columns.
#[async_trait]
pub trait TeamSeasonRepository: Send + Sync {
    /// Every stored record, in store order
    async fn list_all(&self) -> StoreResult<Vec<TeamSeasonRecord>>;

    /// Find a record by team name, ignoring case
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<TeamSeasonRecord>>;

    /// Records with more wins than `threshold`, at most ten
    async fn find_by_min_wins(&self, threshold: f64) -> StoreResult<Vec<TeamSeasonRecord>>;

    /// Records for `year` that scored at least `min_goals`
    async fn find_by_year_and_min_goals(
        &self,
        year: f64,
        min_goals: f64,
    ) -> StoreResult<Vec<TeamSeasonRecord>>;

    /// Season totals, or `None` when no record exists for `year`
    async fn aggregate_totals(&self, year: f64) -> StoreResult<Option<SeasonTotals>>;

    /// Per-record goals-per-game for `year`
    async fn aggregate_average_goals(&self, year: f64) -> StoreResult<Vec<AverageGoals>>;

    /// Apply `patch` to the record named `name` and return its new state
    async fn update_by_name(
        &self,
        name: &str,
        patch: &TeamSeasonPatch,
    ) -> StoreResult<Option<TeamSeasonRecord>>;

    /// Remove the record named `name` and return what was removed
    async fn delete_by_name(&self, name: &str) -> StoreResult<Option<TeamSeasonRecord>>;

    /// Store a new record under a freshly assigned identity
    async fn insert(&self, season: &NewTeamSeason) -> StoreResult<TeamSeasonRecord>;
}
