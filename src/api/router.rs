use std::path::Path;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, stats, teams};
use crate::api::state::AppState;

/// Builds the API router
///
/// Historical aliases (`/Data`, `/api/football/teams`, `/teams/update/:name`)
/// share handlers with their canonical routes.
pub fn create_router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::home))
        .route("/health", get(health::health_check))
        // Records
        .route("/alldata", get(teams::list_teams))
        .route("/Data", get(teams::list_teams))
        .route("/teams/:name", get(teams::get_team))
        .route("/updateTeam", post(teams::update_team))
        .route(
            "/teams/update/:name",
            post(teams::update_team_by_path).put(teams::update_team_by_path),
        )
        .route("/teams/delete/:name", delete(teams::delete_team))
        .route("/addteamdata", post(teams::add_team))
        // Filters and aggregations
        .route("/Win", get(stats::teams_by_min_wins))
        .route("/api/football/teams", get(stats::teams_by_min_wins))
        .route("/teams-by-goals", get(stats::teams_by_goals))
        .route("/totalsforYear", get(stats::season_totals))
        .route("/api/football/stats", get(stats::season_stats))
        .route("/api/football/averageGoals", get(stats::average_goals))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}

/// Serves a built front-end bundle for every path the API does not match
///
/// Missing files fall back to the bundle's `index.html`.
pub fn with_static_assets(router: Router, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let serve_dir = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    router.fallback_service(serve_dir)
}
