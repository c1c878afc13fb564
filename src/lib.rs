//! Round-Robin Fixture Tracker Library
//!
//! Tracks a round-robin tournament: fixtures and their scores, a standings
//! table computed from played fixtures, and per-round user comments.
//!
//! ## Features
//!
//! - **Fixture Store**: Load fixtures from a JSON feed, add fixtures, edit scores
//! - **Comment Store**: Add, edit and delete comments attached to a round
//! - **Standings**: 3 points for a win, 1 for a draw, ranked by points then goal difference
//! - **Time-aware Views**: Played/scheduled status is decided against a clock at query time
//! - **Id Strategies**: The original lowest-free-slot scan or a per-store monotonic counter
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use fixture_tracker::{
//!     core::FixedClock, storage::NewGame, IdStrategy, RoundNum, TournamentStore,
//! };
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
//! let mut store = TournamentStore::new(IdStrategy::Monotonic).with_clock(FixedClock(now));
//!
//! store.add_game(NewGame {
//!     round_num: RoundNum::new(1),
//!     team_1: "Lions".to_string(),
//!     team_2: "Tigers".to_string(),
//!     team_1_score: 2,
//!     team_2_score: 0,
//!     match_time: Utc.with_ymd_and_hms(2024, 5, 30, 18, 0, 0).unwrap(),
//! })?;
//!
//! let table = store.standings();
//! assert_eq!(table[0].team_name, "Lions");
//! assert_eq!(table[0].points, 3);
//! assert_eq!(store.rounds_completed(), 99);
//! # Ok::<(), fixture_tracker::TrackerError>(())
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a feed file and name the admins shown in round views:
//! ```bash
//! export FIXTURE_TRACKER_DATA=./initial_data.json
//! export FIXTURE_TRACKER_ADMINS=alice,bob
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod feed;
pub mod standings;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{CommentId, GameId, MatchTime, RoundNum};
pub use crate::core::{IdStrategy, TrackerConfig};
pub use error::{Result, TrackerError};
pub use standings::{compute_standings, TeamScore};
pub use storage::{Comment, Game, SharedStore, TournamentStore};

pub use crate::core::config::{ADMINS_ENV_VAR, DATA_PATH_ENV_VAR};
