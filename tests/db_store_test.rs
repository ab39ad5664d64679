//! Tests for the sqlite store implementation.

use gomoku_arena::{
    Database, Game, GameStatus, GameStore, HistoryStore, NewHistory, NewScore, PlayerStore,
    ScoreStore,
};
use tempfile::TempDir;

fn setup_test_db() -> (TempDir, Database) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir
        .path()
        .join("arena.db")
        .to_str()
        .expect("Invalid path")
        .to_string();
    let db = Database::open(db_path).expect("Failed to open database");
    (dir, db)
}

fn sample_history(game_id: &str, round: i32, match_number: i32) -> NewHistory {
    NewHistory::new(
        game_id.to_string(),
        round,
        match_number,
        "alice".to_string(),
        "bob".to_string(),
        Some("alice".to_string()),
        9,
    )
}

#[test]
fn test_open_is_idempotent() {
    let (dir, _db) = setup_test_db();
    let db_path = dir
        .path()
        .join("arena.db")
        .to_str()
        .expect("Invalid path")
        .to_string();
    // Reopening must not re-run migrations destructively.
    Database::open(db_path).expect("second open failed");
}

#[test]
fn test_add_player_and_find_all_in_registration_order() {
    let (_dir, db) = setup_test_db();
    db.add_player("alice".to_string(), "http://alice:8080".to_string())
        .expect("add failed");
    db.add_player("bob".to_string(), "http://bob:8080".to_string())
        .expect("add failed");

    let players = db.find_all().expect("find_all failed");
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].user_name(), "alice");
    assert_eq!(players[0].network_address(), "http://alice:8080");
    assert_eq!(players[1].user_name(), "bob");
}

#[test]
fn test_duplicate_player_name_fails() {
    let (_dir, db) = setup_test_db();
    db.add_player("alice".to_string(), "http://one:8080".to_string())
        .expect("add failed");
    let result = db.add_player("alice".to_string(), "http://two:8080".to_string());
    assert!(result.is_err(), "duplicate name should fail");
}

#[test]
fn test_game_lifecycle_running_to_finished() {
    let (_dir, db) = setup_test_db();
    db.create_game("t1").expect("create failed");

    let mut game = db
        .find_one("t1")
        .expect("find failed")
        .expect("game missing");
    assert_eq!(*game.status(), GameStatus::Running);

    game.set_status(GameStatus::Finished);
    GameStore::save(&db, &game).expect("save failed");

    let reloaded = db
        .find_one("t1")
        .expect("find failed")
        .expect("game missing");
    assert_eq!(*reloaded.status(), GameStatus::Finished);
}

#[test]
fn test_game_save_inserts_when_absent() {
    let (_dir, db) = setup_test_db();
    let game = Game::new("fresh".to_string(), GameStatus::Running);
    GameStore::save(&db, &game).expect("save failed");
    assert!(db.find_one("fresh").expect("find failed").is_some());
}

#[test]
fn test_find_one_unknown_game_is_none() {
    let (_dir, db) = setup_test_db();
    assert!(db.find_one("nope").expect("find failed").is_none());
}

#[test]
fn test_history_save_and_find() {
    let (_dir, db) = setup_test_db();
    let saved = HistoryStore::save(&db, sample_history("t1", 1, 2)).expect("save failed");
    assert!(*saved.id() > 0);

    let found = db
        .find(*saved.id())
        .expect("find failed")
        .expect("record missing");
    assert_eq!(found.game_id(), "t1");
    assert_eq!(*found.round(), 1);
    assert_eq!(*found.match_number(), 2);
    assert_eq!(found.player_one(), "alice");
    assert_eq!(found.player_two(), "bob");
    assert_eq!(found.winner().as_deref(), Some("alice"));
    assert_eq!(*found.steps(), 9);
}

#[test]
fn test_history_with_no_winner_round_trips() {
    let (_dir, db) = setup_test_db();
    let drawn = NewHistory::new(
        "t1".to_string(),
        1,
        1,
        "alice".to_string(),
        "bob".to_string(),
        None,
        0,
    );
    let saved = HistoryStore::save(&db, drawn).expect("save failed");
    let found = db
        .find(*saved.id())
        .expect("find failed")
        .expect("record missing");
    assert_eq!(*found.winner(), None);
}

#[test]
fn test_history_find_unknown_id_is_none() {
    let (_dir, db) = setup_test_db();
    assert!(db.find(404).expect("find failed").is_none());
}

#[test]
fn test_histories_for_game_filters_and_orders() {
    let (_dir, db) = setup_test_db();
    HistoryStore::save(&db, sample_history("t1", 2, 1)).expect("save failed");
    HistoryStore::save(&db, sample_history("t1", 1, 2)).expect("save failed");
    HistoryStore::save(&db, sample_history("t1", 1, 1)).expect("save failed");
    HistoryStore::save(&db, sample_history("other", 1, 1)).expect("save failed");

    let histories = db.histories_for_game("t1").expect("query failed");
    let order: Vec<(i32, i32)> = histories
        .iter()
        .map(|h| (*h.round(), *h.match_number()))
        .collect();
    assert_eq!(order, vec![(1, 1), (1, 2), (2, 1)]);
}

#[test]
fn test_score_save_and_query() {
    let (_dir, db) = setup_test_db();
    let saved = ScoreStore::save(
        &db,
        NewScore::new("t1".to_string(), 1, 1, "alice".to_string(), 3),
    )
    .expect("save failed");
    assert!(*saved.id() > 0);

    ScoreStore::save(
        &db,
        NewScore::new("other".to_string(), 1, 1, "bob".to_string(), 1),
    )
    .expect("save failed");

    let scores = db.scores_for_game("t1").expect("query failed");
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].player_name(), "alice");
    assert_eq!(*scores[0].points(), 3);
}
