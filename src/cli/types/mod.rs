//! Type-safe wrappers for tournament identifiers and timestamps.

pub mod ids;
pub mod time;

pub use ids::{CommentId, GameId, RoundNum};
pub use time::{parse_feed_timestamp, MatchTime};
