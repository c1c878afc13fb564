//! Storage layer for the fixture tracker
//!
//! Everything lives in memory for the lifetime of the process:
//! - `models`: Data structures
//! - `store`: The tournament store, id allocation and the shared handle
//! - `fixtures`: Fixture operations and derived fixture views
//! - `comments`: Comment operations

pub mod comments;
pub mod fixtures;
pub mod models;
pub mod store;


// Re-export the main types and store struct for easy access
pub use fixtures::ROUND_SENTINEL;
pub use models::*;
pub use store::{SharedStore, TournamentStore};
