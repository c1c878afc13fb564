//! Fixture feed: the JSON file a tournament is loaded from

pub mod load;
pub mod types;

pub use load::{load_tournament, parse_fixture_feed, read_fixture_feed};
pub use types::FixtureRecord;
