//! Fixture operations: add, score edits and the derived fixture views

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::{
    models::{Game, NewGame},
    store::TournamentStore,
};
use crate::cli::types::{GameId, RoundNum};
use crate::error::{Result, TrackerError};
use crate::standings::{compute_standings, TeamScore};

/// Upper bound used when no future game exists, so the completed-rounds
/// count comes out as `ROUND_SENTINEL - 1`.
pub const ROUND_SENTINEL: u32 = 100;

impl TournamentStore {
    /// Add a fixture and return the id it was stored under.
    ///
    /// With [`IdStrategy::SharedLowestFree`](crate::core::IdStrategy) the id is
    /// the lowest one not used by a comment, which may replace an existing game.
    /// A game between a team and itself is rejected before an id is taken.
    pub fn add_game(&mut self, new_game: NewGame) -> Result<GameId> {
        if new_game.team_1 == new_game.team_2 {
            return Err(TrackerError::SameTeam {
                team: new_game.team_1,
            });
        }
        let id = self.allocate_game_id()?;
        let game = new_game.into_game(id);
        debug!(game_id = %id, round = %game.round_num, "adding game");

        if let Some(replaced) = self.insert_game(game) {
            warn!(
                game_id = %id,
                team_1 = %replaced.team_1,
                team_2 = %replaced.team_2,
                "new game replaced an existing game with the same id"
            );
        }
        Ok(id)
    }

    /// Replace a game's scores, keeping its id, round, teams and match time
    pub fn edit_game_score(
        &mut self,
        id: GameId,
        team_1_score: u32,
        team_2_score: u32,
    ) -> Result<&Game> {
        let existing = self
            .games
            .get_mut(&id)
            .ok_or(TrackerError::GameNotFound { id })?;
        *existing = existing.with_scores(team_1_score, team_2_score);
        debug!(game_id = %id, team_1_score, team_2_score, "game score edited");
        Ok(&*existing)
    }

    pub fn game(&self, id: GameId) -> Result<&Game> {
        self.games.get(&id).ok_or(TrackerError::GameNotFound { id })
    }

    /// Games in a round. Each call scans the store afresh.
    pub fn round_games(&self, round_num: RoundNum) -> impl Iterator<Item = &Game> + '_ {
        self.games
            .values()
            .filter(move |game| game.round_num == round_num)
    }

    /// Games whose match time is still in the future at the time of the call
    pub fn scheduled_games(&self) -> impl Iterator<Item = &Game> + '_ {
        self.scheduled_games_at(self.now())
    }

    /// Games still in the future at `now`
    pub fn scheduled_games_at(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Game> + '_ {
        self.games
            .values()
            .filter(move |game| game.is_scheduled(now))
    }

    /// Lowest round that still has a future game, minus one.
    ///
    /// Capped at [`ROUND_SENTINEL`], so a tournament with nothing scheduled
    /// reports 99.
    pub fn rounds_completed(&self) -> i64 {
        self.rounds_completed_at(self.now())
    }

    pub fn rounds_completed_at(&self, now: DateTime<Utc>) -> i64 {
        let first_open_round = self
            .scheduled_games_at(now)
            .map(|game| game.round_num.as_u32())
            .fold(ROUND_SENTINEL, u32::min);
        i64::from(first_open_round) - 1
    }

    /// Standings over every game played by now
    pub fn standings(&self) -> Vec<TeamScore> {
        self.standings_at(self.now())
    }

    pub fn standings_at(&self, now: DateTime<Utc>) -> Vec<TeamScore> {
        compute_standings(self.games.values(), now)
    }
}
