use std::sync::Arc;

use crate::domain::repositories::TeamSeasonRepository;

/// Shared handler state
///
/// Holds the store client constructed at startup. Handlers keep nothing
/// between requests.
#[derive(Clone)]
pub struct AppState {
    pub seasons: Arc<dyn TeamSeasonRepository>,
}

impl AppState {
    pub fn new(seasons: Arc<dyn TeamSeasonRepository>) -> Self {
        Self { seasons }
    }
}
