//! Unit tests for feed record types

use super::*;
use chrono::{TimeZone, Utc};
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    fn record_json() -> serde_json::Value {
        json!({
            "MatchNumber": 12,
            "RoundNumber": 2,
            "DateUtc": "2023-03-16 08:20:00Z",
            "Location": "Central Park",
            "HomeTeam": "Lions",
            "AwayTeam": "Tigers",
            "Group": null,
            "HomeTeamScore": 3,
            "AwayTeamScore": 1
        })
    }

    #[test]
    fn test_fixture_record_deserialization() {
        let record: FixtureRecord = serde_json::from_value(record_json()).unwrap();
        assert_eq!(record.match_number, 12);
        assert_eq!(record.round_number, 2);
        assert_eq!(record.home_team, "Lions");
        assert_eq!(record.away_team, "Tigers");
        assert_eq!(record.home_team_score, Some(3));
        assert_eq!(record.away_team_score, Some(1));
        assert_eq!(record.date_utc, "2023-03-16 08:20:00Z");
    }

    #[test]
    fn test_fixture_record_null_scores() {
        let mut value = record_json();
        value["HomeTeamScore"] = json!(null);
        value.as_object_mut().unwrap().remove("AwayTeamScore");

        let record: FixtureRecord = serde_json::from_value(value).unwrap();
        let game = record.into_game().unwrap();
        assert_eq!(game.team_1_score, 0);
        assert_eq!(game.team_2_score, 0);
    }

    #[test]
    fn test_fixture_record_missing_team_is_rejected() {
        let mut value = record_json();
        value.as_object_mut().unwrap().remove("HomeTeam");
        assert!(serde_json::from_value::<FixtureRecord>(value).is_err());
    }

    #[test]
    fn test_fixture_record_negative_score_is_rejected() {
        let mut value = record_json();
        value["AwayTeamScore"] = json!(-1);
        assert!(serde_json::from_value::<FixtureRecord>(value).is_err());
    }

    #[test]
    fn test_into_game() {
        let record: FixtureRecord = serde_json::from_value(record_json()).unwrap();
        let game = record.into_game().unwrap();

        assert_eq!(game.id, GameId::new(12));
        assert_eq!(game.round_num, RoundNum::new(2));
        assert_eq!(game.team_1, "Lions");
        assert_eq!(game.team_2, "Tigers");
        assert_eq!(game.team_1_score, 3);
        assert_eq!(game.team_2_score, 1);
        assert_eq!(
            game.match_time,
            Utc.with_ymd_and_hms(2023, 3, 16, 8, 20, 0).unwrap()
        );
    }

    #[test]
    fn test_into_game_same_team_is_rejected() {
        let mut record: FixtureRecord = serde_json::from_value(record_json()).unwrap();
        record.away_team = "Lions".to_string();

        match record.into_game().unwrap_err() {
            TrackerError::InvalidRecord { match_number, .. } => assert_eq!(match_number, 12),
            other => panic!("Expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_into_game_bad_timestamp() {
        let mut record: FixtureRecord = serde_json::from_value(record_json()).unwrap();
        record.date_utc = "next tuesday".to_string();

        assert!(matches!(
            record.into_game(),
            Err(TrackerError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_fixture_record_serialization_uses_feed_keys() {
        let record: FixtureRecord = serde_json::from_value(record_json()).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["MatchNumber"], 12);
        assert_eq!(value["DateUtc"], "2023-03-16 08:20:00Z");
    }
}
