use serde::{Deserialize, Serialize};

use crate::cli::types::{parse_feed_timestamp, GameId, RoundNum};
use crate::error::{Result, TrackerError};
use crate::storage::Game;

#[cfg(test)]
mod tests;

/// One fixture as published in the feed file.
///
/// Unplayed fixtures are usually published with null scores; those read as 0.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FixtureRecord {
    pub match_number: u32,
    pub round_number: u32,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub home_team_score: Option<u32>,
    #[serde(default)]
    pub away_team_score: Option<u32>,
    /// `YYYY-MM-DD HH:MM:SS` followed by a zone marker, e.g. `2023-03-16 08:20:00Z`
    pub date_utc: String,
}

impl FixtureRecord {
    /// Convert to a stored game, keyed by the feed's match number
    pub fn into_game(self) -> Result<Game> {
        if self.home_team == self.away_team {
            return Err(TrackerError::InvalidRecord {
                match_number: self.match_number,
                message: format!("home and away team are both '{}'", self.home_team),
            });
        }

        let match_time = parse_feed_timestamp(&self.date_utc)?;

        Ok(Game {
            id: GameId::new(self.match_number),
            round_num: RoundNum::new(self.round_number),
            team_1: self.home_team,
            team_2: self.away_team,
            team_1_score: self.home_team_score.unwrap_or(0),
            team_2_score: self.away_team_score.unwrap_or(0),
            match_time,
        })
    }
}
