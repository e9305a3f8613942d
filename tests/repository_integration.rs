//! Integration tests for repository layer
//!
//! These tests verify that the SQLite repository correctly implements the
//! store contract: case-insensitive lookups, partial updates, filters and
//! aggregations. Each test runs against its own in-memory database.

use football_stats_api::domain::repositories::TeamSeasonRepository;
use football_stats_api::domain::season::{NewTeamSeason, TeamSeasonPatch};
use football_stats_api::infrastructure::database;
use football_stats_api::infrastructure::repositories::SqliteTeamSeasonRepository;

/// Set up a repository over a fresh in-memory database
async fn setup_repo() -> SqliteTeamSeasonRepository {
    let pool = database::connect_in_memory()
        .await
        .expect("Failed to open in-memory database");

    SqliteTeamSeasonRepository::new(pool)
}

fn season(team: &str, year: i64, win: i64, goals_for: i64, games_played: i64) -> NewTeamSeason {
    NewTeamSeason {
        team: team.to_string(),
        games_played,
        win,
        draw: 2,
        loss: 2,
        goals_for,
        goals_against: 10,
        points: win * 3 + 2,
        year,
    }
}

#[tokio::test]
async fn test_insert_assigns_identity_and_echoes_fields() {
    let repo = setup_repo().await;
    let new = season("Rovers", 2005, 6, 20, 10);

    let stored = repo.insert(&new).await.expect("Failed to insert");

    assert!(!stored.id.is_empty(), "Identity should be assigned");
    assert_eq!(stored.team, "Rovers");
    assert_eq!(stored.games_played, 10);
    assert_eq!(stored.win, 6);
    assert_eq!(stored.draw, 2);
    assert_eq!(stored.loss, 2);
    assert_eq!(stored.goals_for, 20);
    assert_eq!(stored.goals_against, 10);
    assert_eq!(stored.points, 20);
    assert_eq!(stored.year, 2005);

    let found = repo
        .find_by_name("Rovers")
        .await
        .expect("Failed to find")
        .expect("Record should exist");
    assert_eq!(found, stored);
}

#[tokio::test]
async fn test_list_all_empty_and_populated() {
    let repo = setup_repo().await;

    assert!(repo.list_all().await.unwrap().is_empty());

    repo.insert(&season("Arsenal", 2005, 20, 68, 38)).await.unwrap();
    repo.insert(&season("Chelsea", 2005, 29, 72, 38)).await.unwrap();

    let all = repo.list_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].team, "Arsenal", "Store order is insertion order");
    assert_eq!(all[1].team, "Chelsea");
}

#[tokio::test]
async fn test_find_by_name_ignores_case() {
    let repo = setup_repo().await;
    let stored = repo.insert(&season("Arsenal", 2005, 20, 68, 38)).await.unwrap();

    for name in ["arsenal", "ARSENAL", "Arsenal", "aRsEnAl"] {
        let found = repo.find_by_name(name).await.unwrap();
        assert_eq!(found.as_ref(), Some(&stored), "lookup by {name}");
    }
}

#[tokio::test]
async fn test_find_by_name_is_not_a_pattern_match() {
    let repo = setup_repo().await;
    repo.insert(&season("Arsenal", 2005, 20, 68, 38)).await.unwrap();

    assert!(repo.find_by_name("Arsen").await.unwrap().is_none());
    assert!(repo.find_by_name("Arsen.*").await.unwrap().is_none());
    assert!(repo.find_by_name("%").await.unwrap().is_none());
    assert!(repo.find_by_name("").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_names_resolve_to_earliest_record() {
    let repo = setup_repo().await;
    let first = repo.insert(&season("Rovers", 2004, 5, 18, 10)).await.unwrap();
    let second = repo.insert(&season("rovers", 2005, 6, 20, 10)).await.unwrap();

    let found = repo.find_by_name("ROVERS").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);

    let deleted = repo.delete_by_name("Rovers").await.unwrap().unwrap();
    assert_eq!(deleted.id, first.id);

    let remaining = repo.find_by_name("Rovers").await.unwrap().unwrap();
    assert_eq!(remaining.id, second.id);
}

#[tokio::test]
async fn test_find_by_min_wins_is_strict_and_capped() {
    let repo = setup_repo().await;
    for i in 0..15 {
        repo.insert(&season(&format!("Team {i}"), 2005, i, 20, 38))
            .await
            .unwrap();
    }

    let teams = repo.find_by_min_wins(2.0).await.unwrap();
    assert_eq!(teams.len(), 10, "Result should be capped at 10");
    assert!(teams.iter().all(|t| t.win > 2));

    let teams = repo.find_by_min_wins(12.0).await.unwrap();
    assert_eq!(teams.len(), 2);
    assert!(teams.iter().all(|t| t.win > 12));

    let teams = repo.find_by_min_wins(12.5).await.unwrap();
    assert_eq!(teams.len(), 2);

    assert!(repo.find_by_min_wins(14.0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_by_year_and_min_goals_is_inclusive() {
    let repo = setup_repo().await;
    repo.insert(&season("Arsenal", 2005, 20, 68, 38)).await.unwrap();
    repo.insert(&season("Chelsea", 2005, 29, 72, 38)).await.unwrap();
    repo.insert(&season("Everton", 2005, 18, 45, 38)).await.unwrap();
    repo.insert(&season("Chelsea", 2006, 24, 64, 38)).await.unwrap();

    let teams = repo.find_by_year_and_min_goals(2005.0, 68.0).await.unwrap();
    let names: Vec<&str> = teams.iter().map(|t| t.team.as_str()).collect();
    assert_eq!(names, vec!["Arsenal", "Chelsea"]);

    assert!(repo
        .find_by_year_and_min_goals(2007.0, 0.0)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_aggregate_totals_sums_matching_year() {
    let repo = setup_repo().await;
    repo.insert(&season("Arsenal", 2005, 20, 68, 38)).await.unwrap();
    repo.insert(&season("Chelsea", 2005, 29, 72, 38)).await.unwrap();
    repo.insert(&season("Everton", 2006, 18, 45, 38)).await.unwrap();

    let totals = repo
        .aggregate_totals(2005.0)
        .await
        .unwrap()
        .expect("Totals should exist for 2005");

    assert_eq!(totals.total_games_played, 76);
    assert_eq!(totals.total_wins, 49);
    assert_eq!(totals.total_draw, 4);
}

#[tokio::test]
async fn test_aggregate_totals_for_empty_year_is_none() {
    let repo = setup_repo().await;
    repo.insert(&season("Arsenal", 2005, 20, 68, 38)).await.unwrap();

    assert!(repo.aggregate_totals(1999.0).await.unwrap().is_none());
}

#[tokio::test]
async fn test_aggregate_average_goals() {
    let repo = setup_repo().await;
    repo.insert(&season("Rovers", 2005, 6, 25, 10)).await.unwrap();
    repo.insert(&season("Idle", 2005, 0, 0, 0)).await.unwrap();
    repo.insert(&season("Elsewhere", 2006, 6, 30, 10)).await.unwrap();

    let rows = repo.aggregate_average_goals(2005.0).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].team, "Rovers");
    assert_eq!(rows[0].goals_for, Some(25));
    assert_eq!(rows[0].games_played, Some(10));
    assert_eq!(rows[0].average_goals_for, 2.5);
    assert_eq!(rows[1].team, "Idle");
    assert_eq!(rows[1].average_goals_for, 0.0);
}

#[tokio::test]
async fn test_update_by_name_replaces_only_supplied_fields() {
    let repo = setup_repo().await;
    let stored = repo.insert(&season("Rovers", 2005, 6, 20, 10)).await.unwrap();

    let patch = TeamSeasonPatch {
        win: Some(7),
        points: Some(23),
        ..Default::default()
    };

    let updated = repo
        .update_by_name("rovers", &patch)
        .await
        .unwrap()
        .expect("Record should be updated");

    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.team, "Rovers");
    assert_eq!(updated.win, 7);
    assert_eq!(updated.points, 23);
    assert_eq!(updated.games_played, 10);
    assert_eq!(updated.goals_for, 20);
    assert_eq!(updated.year, 2005);

    let found = repo.find_by_name("Rovers").await.unwrap().unwrap();
    assert_eq!(found, updated);
}

#[tokio::test]
async fn test_update_with_empty_patch_returns_current_state() {
    let repo = setup_repo().await;
    let stored = repo.insert(&season("Rovers", 2005, 6, 20, 10)).await.unwrap();

    let updated = repo
        .update_by_name("Rovers", &TeamSeasonPatch::default())
        .await
        .unwrap();

    assert_eq!(updated, Some(stored));
}

#[tokio::test]
async fn test_update_and_delete_missing_name() {
    let repo = setup_repo().await;
    let patch = TeamSeasonPatch {
        win: Some(1),
        ..Default::default()
    };

    assert!(repo.update_by_name("Nobody", &patch).await.unwrap().is_none());
    assert!(repo.delete_by_name("Nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_then_find_returns_none() {
    let repo = setup_repo().await;
    let stored = repo.insert(&season("Rovers", 2005, 6, 20, 10)).await.unwrap();

    let deleted = repo
        .delete_by_name("ROVERS")
        .await
        .unwrap()
        .expect("Record should be deleted");
    assert_eq!(deleted, stored);

    assert!(repo.find_by_name("Rovers").await.unwrap().is_none());
    assert!(repo.list_all().await.unwrap().is_empty());
}
