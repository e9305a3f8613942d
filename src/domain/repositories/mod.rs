// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod season_repository;

pub use season_repository::{StoreError, StoreResult, TeamSeasonRepository};
