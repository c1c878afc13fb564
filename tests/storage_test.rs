//! Integration tests for the tournament store

use chrono::{DateTime, Duration, TimeZone, Utc};
use fixture_tracker::{
    core::FixedClock,
    storage::{NewGame, ROUND_SENTINEL},
    CommentId, GameId, IdStrategy, RoundNum, SharedStore, TournamentStore, TrackerError,
};

fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap()
}

fn new_game(round: u32, team_1: &str, team_2: &str, score_1: u32, score_2: u32, day: i64) -> NewGame {
    NewGame {
        round_num: RoundNum::new(round),
        team_1: team_1.to_string(),
        team_2: team_2.to_string(),
        team_1_score: score_1,
        team_2_score: score_2,
        match_time: kickoff() + Duration::days(day),
    }
}

/// Three rounds over three weeks, evaluated between round 2 and round 3.
fn create_test_store() -> TournamentStore {
    let mut store =
        TournamentStore::new(IdStrategy::Monotonic).with_clock(FixedClock(kickoff() + Duration::days(10)));
    store.add_game(new_game(1, "A", "B", 2, 0, 0)).unwrap();
    store.add_game(new_game(1, "C", "D", 1, 1, 0)).unwrap();
    store.add_game(new_game(2, "A", "C", 0, 0, 7)).unwrap();
    store.add_game(new_game(2, "B", "D", 3, 1, 7)).unwrap();
    store.add_game(new_game(3, "A", "D", 0, 0, 14)).unwrap();
    store.add_game(new_game(3, "B", "C", 0, 0, 14)).unwrap();
    store
}

#[test]
fn test_store_creation() {
    let store = create_test_store();
    assert_eq!(store.game_count(), 6);
    assert_eq!(store.comment_count(), 0);
    assert_eq!(store.id_strategy(), IdStrategy::Monotonic);
}

#[test]
fn test_standings_after_two_rounds() {
    let store = create_test_store();
    let table = store.standings();

    let summary: Vec<(&str, u32, i64)> = table
        .iter()
        .map(|t| (t.team_name.as_str(), t.points, t.goal_diff))
        .collect();

    // A: W 2-0, D 0-0 -> 4 pts, +2
    // B: L 0-2, W 3-1 -> 3 pts, 0
    // C: D 1-1, D 0-0 -> 2 pts, 0
    // D: D 1-1, L 1-3 -> 1 pt, -2
    assert_eq!(
        summary,
        vec![("A", 4, 2), ("B", 3, 0), ("C", 2, 0), ("D", 1, -2)]
    );
}

#[test]
fn test_standings_points_per_played_game() {
    let store = create_test_store();
    let total: u32 = store.standings().iter().map(|t| t.points).sum();
    // Four played games: two wins (3 each) and two draws (2 each).
    assert_eq!(total, 3 + 2 + 2 + 3);
}

#[test]
fn test_scheduled_games_and_rounds_completed() {
    let store = create_test_store();

    let scheduled: Vec<RoundNum> = store.scheduled_games().map(|g| g.round_num).collect();
    assert_eq!(scheduled, vec![RoundNum::new(3), RoundNum::new(3)]);
    assert_eq!(store.rounds_completed(), 2);
}

#[test]
fn test_rounds_completed_before_kickoff() {
    let store = create_test_store().with_clock(FixedClock(kickoff() - Duration::days(1)));
    assert_eq!(store.rounds_completed(), 0);
    assert!(store.standings().is_empty());
}

#[test]
fn test_rounds_completed_after_last_game() {
    let store = create_test_store().with_clock(FixedClock(kickoff() + Duration::days(30)));
    assert_eq!(store.rounds_completed(), i64::from(ROUND_SENTINEL) - 1);
    assert_eq!(store.scheduled_games().count(), 0);
}

#[test]
fn test_editing_a_future_game_does_not_change_standings() {
    let mut store = create_test_store();
    let before = store.standings();

    let future = store.scheduled_games().next().unwrap().id;
    store.edit_game_score(future, 9, 0).unwrap();

    assert_eq!(store.standings(), before);
}

#[test]
fn test_game_enters_standings_once_played() {
    let mut store = create_test_store();
    let future = store.scheduled_games().next().unwrap().id;
    store.edit_game_score(future, 1, 0).unwrap();

    let store = store.with_clock(FixedClock(kickoff() + Duration::days(15)));
    let total: u32 = store.standings().iter().map(|t| t.points).sum();
    // Round 3 adds one win and one 0-0 draw.
    assert_eq!(total, 10 + 3 + 2);
}

#[test]
fn test_comment_lifecycle() {
    let mut store = create_test_store();

    let id = store.add_comment(RoundNum::new(2), "great round", "alice").unwrap();
    assert_eq!(store.round_comments(RoundNum::new(2)).count(), 1);

    store.edit_comment(id, "even better on replay").unwrap();
    let comment = store.comment(id).unwrap();
    assert_eq!(comment.comment_text, "even better on replay");
    assert_eq!(comment.username, "alice");

    assert!(store.remove_comment(id));
    assert!(!store.remove_comment(id));
    assert!(matches!(
        store.comment(id),
        Err(TrackerError::CommentNotFound { .. })
    ));
}

#[test]
fn test_shared_lowest_free_game_ids_follow_comment_ids() {
    let mut store = TournamentStore::new(IdStrategy::SharedLowestFree);
    store.add_comment(RoundNum::new(1), "first", "alice").unwrap();

    let id = store.add_game(new_game(1, "A", "B", 0, 0, 0)).unwrap();
    assert_eq!(id, GameId::new(1));

    store.remove_comment(CommentId::new(0));
    let id = store.add_game(new_game(1, "C", "D", 0, 0, 0)).unwrap();
    assert_eq!(id, GameId::new(0));
}

#[test]
fn test_shared_store_read_and_write() {
    let shared = SharedStore::new(create_test_store());

    let id = shared
        .write(|store| store.add_game(new_game(4, "E", "F", 1, 0, 21)))
        .unwrap()
        .unwrap();
    let round = shared
        .read(|store| store.game(id).map(|g| g.round_num))
        .unwrap()
        .unwrap();

    assert_eq!(round, RoundNum::new(4));
}
