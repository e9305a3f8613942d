// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod sqlite_season_repository;

pub use sqlite_season_repository::SqliteTeamSeasonRepository;
