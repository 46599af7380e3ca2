use std::path::PathBuf;

use arcade_shooter::compute::init_state;
use arcade_shooter::entities::{GameStatus, Rules};
use arcade_shooter::error::GameError;
use arcade_shooter::score_store::*;

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "arcade_shooter_test_{}_{}",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn missing_file_reads_as_zero() {
    let store = FileScoreStore::new(temp_path("missing"));
    assert_eq!(store.load(), 0);
}

#[test]
fn malformed_file_reads_as_zero() {
    let path = temp_path("malformed");
    std::fs::write(&path, "not a number").unwrap();
    assert_eq!(FileScoreStore::new(&path).load(), 0);

    std::fs::write(&path, "-40").unwrap();
    assert_eq!(FileScoreStore::new(&path).load(), 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_then_load() {
    let path = temp_path("roundtrip");
    let store = FileScoreStore::new(&path);
    store.save(4200).unwrap();
    assert_eq!(store.load(), 4200);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "4200");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let path = temp_path("whitespace");
    std::fs::write(&path, "  77\n").unwrap();
    assert_eq!(FileScoreStore::new(&path).load(), 77);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_into_missing_directory_fails() {
    let path = temp_path("no_such_dir").join("best");
    let err = FileScoreStore::new(&path).save(1).unwrap_err();
    assert!(matches!(err, GameError::ScoreWrite { .. }));
}

#[test]
fn memory_store_starts_empty() {
    let store = MemoryScoreStore::new();
    assert_eq!(store.load(), 0);
    assert_eq!(store.writes(), 0);
}

#[test]
fn finish_session_writes_only_when_beaten() {
    let store = MemoryScoreStore::with_value(1000);
    let mut state = init_state(800.0, 600.0, Rules::default(), 1000);
    state.status = GameStatus::GameOver;

    state.score = 1000;
    let summary = finish_session(&state, &store).unwrap();
    assert_eq!(
        summary,
        SessionSummary { final_score: 1000, best_score: 1000, new_best: false }
    );
    assert_eq!(store.writes(), 0);

    state.score = 1500;
    let summary = finish_session(&state, &store).unwrap();
    assert!(summary.new_best);
    assert_eq!(summary.best_score, 1500);
    assert_eq!(store.writes(), 1);
    assert_eq!(store.load(), 1500);
}

#[test]
fn zero_score_never_writes() {
    let store = MemoryScoreStore::new();
    let state = init_state(800.0, 600.0, Rules::default(), 0);
    let summary = finish_session(&state, &store).unwrap();
    assert!(!summary.new_best);
    assert_eq!(store.writes(), 0);
}

#[test]
fn unsaved_summary_uses_session_best() {
    let mut state = init_state(800.0, 600.0, Rules::default(), 900);
    state.score = 500;
    assert_eq!(
        SessionSummary::unsaved(&state),
        SessionSummary { final_score: 500, best_score: 900, new_best: false }
    );

    state.score = 1200;
    let summary = SessionSummary::unsaved(&state);
    assert!(summary.new_best);
    assert_eq!(summary.best_score, 1200);
}
