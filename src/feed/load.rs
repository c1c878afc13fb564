//! Reading the fixture feed file into a tournament store

use std::path::Path;

use tracing::{debug, info};

use super::types::FixtureRecord;
use crate::core::TrackerConfig;
use crate::error::Result;
use crate::storage::{Game, TournamentStore};

/// Parse a feed document (a JSON array of fixture records).
///
/// Any malformed record fails the whole feed.
pub fn parse_fixture_feed(contents: &str) -> Result<Vec<Game>> {
    let records: Vec<FixtureRecord> = serde_json::from_str(contents)?;
    records.into_iter().map(FixtureRecord::into_game).collect()
}

pub fn read_fixture_feed(path: &Path) -> Result<Vec<Game>> {
    let contents = std::fs::read_to_string(path)?;
    parse_fixture_feed(&contents)
}

/// Build the store for one process: load the feed, then seed the sample
/// comments if the config asks for them.
pub fn load_tournament(path: &Path, config: &TrackerConfig) -> Result<TournamentStore> {
    debug!(path = %path.display(), "reading fixture feed");
    let games = read_fixture_feed(path)?;

    let mut store = TournamentStore::new(config.id_strategy);
    store.load_games(games);
    if config.seed_comments {
        store.seed_sample_comments()?;
    }

    info!(
        games = store.game_count(),
        comments = store.comment_count(),
        id_strategy = %config.id_strategy,
        "tournament loaded"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use std::io::Write;

    const FEED: &str = r#"[
        {"MatchNumber": 1, "RoundNumber": 1, "DateUtc": "2023-03-16 08:20:00Z",
         "HomeTeam": "Lions", "AwayTeam": "Tigers", "HomeTeamScore": 2, "AwayTeamScore": 0},
        {"MatchNumber": 2, "RoundNumber": 1, "DateUtc": "2023-03-16 10:30:00Z",
         "HomeTeam": "Bears", "AwayTeam": "Wolves", "HomeTeamScore": 1, "AwayTeamScore": 1}
    ]"#;

    #[test]
    fn test_parse_fixture_feed() {
        let games = parse_fixture_feed(FEED).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[1].team_1, "Bears");
    }

    #[test]
    fn test_parse_fixture_feed_empty_array() {
        assert!(parse_fixture_feed("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_fixture_feed_not_an_array() {
        assert!(matches!(
            parse_fixture_feed(r#"{"MatchNumber": 1}"#),
            Err(TrackerError::Json(_))
        ));
    }

    #[test]
    fn test_one_bad_record_fails_the_feed() {
        let feed = FEED.replace("2023-03-16 10:30:00Z", "16/03/2023");
        assert!(matches!(
            parse_fixture_feed(&feed),
            Err(TrackerError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_load_tournament_seeds_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FEED.as_bytes()).unwrap();

        let store = load_tournament(file.path(), &TrackerConfig::default()).unwrap();
        assert_eq!(store.game_count(), 2);
        assert_eq!(store.comment_count(), 4);
    }

    #[test]
    fn test_load_tournament_without_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FEED.as_bytes()).unwrap();

        let config = TrackerConfig {
            seed_comments: false,
            ..TrackerConfig::default()
        };
        let store = load_tournament(file.path(), &config).unwrap();
        assert_eq!(store.comment_count(), 0);
    }

    #[test]
    fn test_load_tournament_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_tournament(&dir.path().join("absent.json"), &TrackerConfig::default());
        assert!(matches!(result, Err(TrackerError::Io(_))));
    }
}
