//! Command implementations for the fixture tracker CLI
//!
//! Each invocation loads the feed once, applies at most one change and
//! prints the resulting view.

pub mod comments;
pub mod common;
pub mod matches;
pub mod round;
pub mod schedule;
pub mod standings;

pub use common::CommandContext;
