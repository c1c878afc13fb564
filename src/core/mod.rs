//! Core utilities for the fixture tracker
//!
//! This module consolidates the pieces every command needs:
//! - `clock`: the evaluation time used to decide whether a game is played
//! - `config`: data file resolution, id strategy and admin list

pub mod clock;
pub mod config;

// Re-export commonly used items for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{resolve_data_path, AdminList, IdStrategy, TrackerConfig};
