//! Data models for the storage layer

use crate::cli::types::{CommentId, GameId, RoundNum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A fixture between two teams in a round.
///
/// Scores are only meaningful once `match_time` has passed; whether that is
/// the case depends on the evaluation time and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub round_num: RoundNum,
    pub team_1: String,
    pub team_2: String,
    pub team_1_score: u32,
    pub team_2_score: u32,
    pub match_time: DateTime<Utc>,
}

/// Result of a played game from the perspective of `team_1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Team1Win,
    Team2Win,
    Draw,
}

impl Game {
    /// Played iff the match time is not in the future.
    pub fn is_played(&self, now: DateTime<Utc>) -> bool {
        self.match_time <= now
    }

    pub fn is_scheduled(&self, now: DateTime<Utc>) -> bool {
        !self.is_played(now)
    }

    pub fn outcome(&self) -> Outcome {
        match self.team_1_score.cmp(&self.team_2_score) {
            Ordering::Greater => Outcome::Team1Win,
            Ordering::Less => Outcome::Team2Win,
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// Same fixture with new scores. Identity, round, teams and time are kept.
    pub fn with_scores(&self, team_1_score: u32, team_2_score: u32) -> Self {
        Self {
            team_1_score,
            team_2_score,
            ..self.clone()
        }
    }
}

/// Fields for a fixture added after load; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub round_num: RoundNum,
    pub team_1: String,
    pub team_2: String,
    pub team_1_score: u32,
    pub team_2_score: u32,
    pub match_time: DateTime<Utc>,
}

impl NewGame {
    pub(crate) fn into_game(self, id: GameId) -> Game {
        Game {
            id,
            round_num: self.round_num,
            team_1: self.team_1,
            team_2: self.team_2,
            team_1_score: self.team_1_score,
            team_2_score: self.team_2_score,
            match_time: self.match_time,
        }
    }
}

/// A user comment attached to a round (not to a single game).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub round_num: RoundNum,
    pub comment_text: String,
    pub username: String,
    /// Reset on every edit, so this is effectively the last-modified time.
    pub date_created: DateTime<Utc>,
}
