//! Integration test: high score persistence across sessions
//!
//! Each test uses its own directory under the system temp dir so the real
//! record file is never touched.

use flappy::core::constants::HIGH_SCORE_FILENAME;
use flappy::flappy::{HighScoreLoad, HighScoreStore, HighScoreUpdate};
use flappy::{FlappyGame, GameConfig};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

fn temp_dir() -> PathBuf {
    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
    let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "flappy-highscore-test-{}-{}",
        std::process::id(),
        test_id
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn session(dir: &PathBuf) -> FlappyGame {
    FlappyGame::new(
        GameConfig::default(),
        HighScoreStore::new(dir.join(HIGH_SCORE_FILENAME)),
    )
}

#[test]
fn test_round_trip_values() {
    let dir = temp_dir();
    let store = HighScoreStore::new(dir.join(HIGH_SCORE_FILENAME));

    for value in [0, 1, 9, 10, 4_294_967_295] {
        store.save(value).unwrap();
        assert_eq!(store.load(), HighScoreLoad::Loaded(value));
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_new_record_is_max_of_old_and_run() {
    let dir = temp_dir();
    let mut game = session(&dir);

    let cases = [(3, 3), (1, 3), (3, 3), (7, 7), (0, 7)];
    for (run_score, expected) in cases {
        game.record_run(run_score);
        assert_eq!(game.high_score, expected);
        assert_eq!(game.store().load().value(), expected);
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_record_survives_restart() {
    let dir = temp_dir();

    let mut first = session(&dir);
    assert_eq!(first.high_score, 0);
    assert_eq!(first.record_run(12), HighScoreUpdate::Saved(12));
    drop(first);

    let second = session(&dir);
    assert_eq!(second.high_score, 12);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_corrupt_record_starts_from_zero() {
    let dir = temp_dir();
    fs::write(dir.join(HIGH_SCORE_FILENAME), "twelve").unwrap();

    let mut game = session(&dir);
    assert_eq!(game.high_score, 0);

    // The next record replaces the corrupt file
    game.record_run(1);
    assert_eq!(
        fs::read_to_string(dir.join(HIGH_SCORE_FILENAME)).unwrap(),
        "1"
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_large_record_is_not_overwritten() {
    let dir = temp_dir();
    fs::write(dir.join(HIGH_SCORE_FILENAME), "5000000000").unwrap();

    let mut game = session(&dir);
    assert_eq!(game.high_score, 5_000_000_000);
    assert_eq!(game.record_run(1), HighScoreUpdate::Unchanged);
    assert_eq!(
        fs::read_to_string(dir.join(HIGH_SCORE_FILENAME)).unwrap(),
        "5000000000"
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_oversized_record_is_kept() {
    let dir = temp_dir();
    let huge = "123456789012345678901234567890";
    fs::write(dir.join(HIGH_SCORE_FILENAME), huge).unwrap();

    let mut game = session(&dir);
    assert_eq!(game.high_score, u64::MAX);
    assert_eq!(game.record_run(1_000_000), HighScoreUpdate::Unchanged);
    assert_eq!(fs::read_to_string(dir.join(HIGH_SCORE_FILENAME)).unwrap(), huge);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_no_temp_file_left_behind() {
    let dir = temp_dir();
    let store = HighScoreStore::new(dir.join(HIGH_SCORE_FILENAME));
    store.save(5).unwrap();

    let names: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![HIGH_SCORE_FILENAME.to_string()]);

    fs::remove_dir_all(&dir).ok();
}
