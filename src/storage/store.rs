//! The tournament store and its shared, lock-guarded handle

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::models::{Comment, Game};
use crate::cli::types::{CommentId, GameId};
use crate::core::{Clock, IdStrategy, SystemClock};
use crate::error::{Result, TrackerError};

/// In-memory fixtures and comments for one tournament.
///
/// Built once per process from the feed and mutated only in memory.
#[derive(Debug)]
pub struct TournamentStore {
    pub(crate) games: BTreeMap<GameId, Game>,
    pub(crate) comments: BTreeMap<CommentId, Comment>,
    pub(crate) id_strategy: IdStrategy,
    // One past the highest id held, so it can exceed u32::MAX.
    pub(crate) next_game_id: u64,
    pub(crate) next_comment_id: u64,
    clock: Box<dyn Clock>,
}

impl Default for TournamentStore {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

impl TournamentStore {
    /// Create an empty store evaluated against the system clock
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self {
            games: BTreeMap::new(),
            comments: BTreeMap::new(),
            id_strategy,
            next_game_id: 0,
            next_comment_id: 0,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock used for every played/scheduled decision
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Insert games keyed by their own ids. A repeated id replaces the earlier game.
    pub fn load_games<I>(&mut self, games: I)
    where
        I: IntoIterator<Item = Game>,
    {
        for game in games {
            let id = game.id;
            if self.insert_game(game).is_some() {
                warn!(game_id = %id, "duplicate game id in feed, keeping the later record");
            }
        }
        debug!(games = self.games.len(), "fixtures loaded");
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    pub fn games(&self) -> impl Iterator<Item = &Game> + '_ {
        self.games.values()
    }

    pub fn comments(&self) -> impl Iterator<Item = &Comment> + '_ {
        self.comments.values()
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub(crate) fn insert_game(&mut self, game: Game) -> Option<Game> {
        self.next_game_id = self.next_game_id.max(u64::from(game.id.as_u32()) + 1);
        self.games.insert(game.id, game)
    }

    pub(crate) fn insert_comment(&mut self, comment: Comment) -> Option<Comment> {
        self.next_comment_id = self
            .next_comment_id
            .max(u64::from(comment.id.as_u32()) + 1);
        self.comments.insert(comment.id, comment)
    }

    /// Lowest id not currently held by a comment.
    pub(crate) fn lowest_free_comment_slot(&self) -> u32 {
        (0..)
            .find(|id| !self.comments.contains_key(&CommentId::new(*id)))
            .unwrap_or(u32::MAX)
    }

    pub(crate) fn allocate_game_id(&self) -> Result<GameId> {
        match self.id_strategy {
            // Scans comment ids, not game ids.
            IdStrategy::SharedLowestFree => Ok(GameId::new(self.lowest_free_comment_slot())),
            IdStrategy::Monotonic => u32::try_from(self.next_game_id)
                .map(GameId::new)
                .map_err(|_| TrackerError::IdsExhausted { kind: "game" }),
        }
    }

    pub(crate) fn allocate_comment_id(&self) -> Result<CommentId> {
        match self.id_strategy {
            IdStrategy::SharedLowestFree => Ok(CommentId::new(self.lowest_free_comment_slot())),
            IdStrategy::Monotonic => u32::try_from(self.next_comment_id)
                .map(CommentId::new)
                .map_err(|_| TrackerError::IdsExhausted { kind: "comment" }),
        }
    }
}

/// A store behind a single mutex, for hosts that serve requests on several threads.
///
/// Every read and write takes the one lock, so mutations keep a single timeline.
#[derive(Debug, Clone)]
pub struct SharedStore(Arc<Mutex<TournamentStore>>);

impl SharedStore {
    pub fn new(store: TournamentStore) -> Self {
        Self(Arc::new(Mutex::new(store)))
    }

    /// Run a read-only closure under the lock
    pub fn read<R>(&self, f: impl FnOnce(&TournamentStore) -> R) -> Result<R> {
        let guard = self.0.lock().map_err(|_| TrackerError::LockPoisoned)?;
        Ok(f(&guard))
    }

    /// Run a mutating closure under the lock
    pub fn write<R>(&self, f: impl FnOnce(&mut TournamentStore) -> R) -> Result<R> {
        let mut guard = self.0.lock().map_err(|_| TrackerError::LockPoisoned)?;
        Ok(f(&mut guard))
    }
}
