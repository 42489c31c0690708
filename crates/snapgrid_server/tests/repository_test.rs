//! Tests for leaderboard repository operations.

use tempfile::NamedTempFile;

use snapgrid_server::{LeaderboardRepository, NewLeaderboardEntry};

/// Creates a temporary database file with schema applied, returns the file
/// handle (must stay in scope to keep the file alive) and a ready repository.
fn setup_test_db() -> (NamedTempFile, LeaderboardRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let repo = LeaderboardRepository::new(db_path).expect("Failed to create repository");
    repo.run_migrations().expect("Migrations failed");
    (db_file, repo)
}

fn entry(name: &str, level: i32, moves: i32, time: i32, created_at: &str) -> NewLeaderboardEntry {
    NewLeaderboardEntry::new(name.to_string(), level, moves, time, created_at.to_string())
}

#[test]
fn test_insert_returns_stored_row() {
    let (_db, repo) = setup_test_db();

    let stored = repo
        .insert_entry(entry("Ann", 4, 30, 95, "2026-08-10T10:00:00.000Z"))
        .expect("Insert failed");

    assert!(*stored.id() > 0);
    assert_eq!(stored.name(), "Ann");
    assert_eq!(*stored.level(), 4);
    assert_eq!(*stored.moves(), 30);
    assert_eq!(*stored.time_seconds(), 95);
    assert_eq!(stored.created_at(), "2026-08-10T10:00:00.000Z");
}

#[test]
fn test_ids_increase_with_insertion_order() {
    let (_db, repo) = setup_test_db();

    let first = repo
        .insert_entry(entry("Ann", 4, 30, 95, "2026-08-10T10:00:00.000Z"))
        .expect("Insert failed");
    let second = repo
        .insert_entry(entry("Ben", 4, 28, 99, "2026-08-10T10:00:01.000Z"))
        .expect("Insert failed");

    assert!(second.id() > first.id());
}

#[test]
fn test_top_entries_empty_board() {
    let (_db, repo) = setup_test_db();
    let entries = repo.top_entries(15).expect("Query failed");
    assert!(entries.is_empty());
}

#[test]
fn test_top_entries_ranked_by_moves_first() {
    let (_db, repo) = setup_test_db();

    // Inserted out of order; fewest moves must come back first.
    repo.insert_entry(entry("mid", 4, 30, 10, "2026-08-10T10:00:00.000Z"))
        .expect("Insert failed");
    repo.insert_entry(entry("best", 4, 12, 500, "2026-08-10T10:00:01.000Z"))
        .expect("Insert failed");
    repo.insert_entry(entry("worst", 4, 55, 5, "2026-08-10T10:00:02.000Z"))
        .expect("Insert failed");

    let entries = repo.top_entries(15).expect("Query failed");
    let names: Vec<&str> = entries.iter().map(|e| e.name().as_str()).collect();
    assert_eq!(names, vec!["best", "mid", "worst"]);
}

#[test]
fn test_equal_moves_break_on_time() {
    let (_db, repo) = setup_test_db();

    repo.insert_entry(entry("slower", 4, 20, 80, "2026-08-10T10:00:00.000Z"))
        .expect("Insert failed");
    repo.insert_entry(entry("faster", 4, 20, 45, "2026-08-10T10:00:01.000Z"))
        .expect("Insert failed");

    let entries = repo.top_entries(15).expect("Query failed");
    let names: Vec<&str> = entries.iter().map(|e| e.name().as_str()).collect();
    assert_eq!(names, vec!["faster", "slower"]);
}

#[test]
fn test_exact_ties_break_on_submission_instant() {
    let (_db, repo) = setup_test_db();

    // Same moves and time; the earlier stamp wins even though it was
    // inserted second.
    repo.insert_entry(entry("later", 4, 20, 45, "2026-08-10T10:00:05.250Z"))
        .expect("Insert failed");
    repo.insert_entry(entry("earlier", 4, 20, 45, "2026-08-10T10:00:05.100Z"))
        .expect("Insert failed");

    let entries = repo.top_entries(15).expect("Query failed");
    let names: Vec<&str> = entries.iter().map(|e| e.name().as_str()).collect();
    assert_eq!(names, vec!["earlier", "later"]);
}

#[test]
fn test_top_entries_respects_limit() {
    let (_db, repo) = setup_test_db();

    for i in 0..5 {
        repo.insert_entry(entry(
            &format!("player{i}"),
            4,
            10 + i,
            60,
            &format!("2026-08-10T10:00:0{i}.000Z"),
        ))
        .expect("Insert failed");
    }

    let entries = repo.top_entries(3).expect("Query failed");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].name(), "player0");
    assert_eq!(entries[2].name(), "player2");
}

#[test]
fn test_count_entries() {
    let (_db, repo) = setup_test_db();
    assert_eq!(repo.count_entries().expect("Count failed"), 0);

    repo.insert_entry(entry("Ann", 4, 30, 95, "2026-08-10T10:00:00.000Z"))
        .expect("Insert failed");
    repo.insert_entry(entry("Ben", 3, 12, 40, "2026-08-10T10:00:01.000Z"))
        .expect("Insert failed");

    assert_eq!(repo.count_entries().expect("Count failed"), 2);
}

#[test]
fn test_migrations_are_idempotent() {
    let (_db, repo) = setup_test_db();
    repo.run_migrations().expect("Second run failed");
    assert_eq!(repo.count_entries().expect("Count failed"), 0);
}
