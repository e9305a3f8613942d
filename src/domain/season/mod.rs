// Season domain module
// Contains the team-season record, its insert/patch shapes and derived stats

pub mod record;
pub mod stats;

// Re-export main types for convenience
pub use record::{NewTeamSeason, TeamSeasonDraft, TeamSeasonPatch, TeamSeasonRecord};
pub use stats::{AverageGoals, SeasonTotals};
