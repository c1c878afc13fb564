//! Error types for the fixture tracker

use thiserror::Error;

use crate::cli::types::{CommentId, GameId};


pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Game not found: {id}")]
    GameNotFound { id: GameId },

    #[error("Comment not found: {id}")]
    CommentNotFound { id: CommentId },

    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid fixture record {match_number}: {message}")]
    InvalidRecord { match_number: u32, message: String },

    #[error("A game needs two different teams, got '{team}' twice")]
    SameTeam { team: String },

    #[error("No {kind} ids left to allocate")]
    IdsExhausted { kind: &'static str },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fixture data file not found and {env_var} environment variable not set")]
    MissingDataFile { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Tournament store lock poisoned")]
    LockPoisoned,
}
