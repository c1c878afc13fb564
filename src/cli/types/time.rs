//! Timestamp parsing for feed records and command-line input.

use crate::error::{Result, TrackerError};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout of the feed's `DateUtc` field once its zone marker is removed.
pub const FEED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Layout accepted for match times typed on the command line.
pub const INPUT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a feed timestamp such as `2023-03-16 08:20:00Z`.
///
/// The final character (the zone marker) is dropped unconditionally and the
/// remainder is read as UTC.
pub fn parse_feed_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let mut chars = raw.chars();
    chars.next_back();
    parse_utc(chars.as_str(), FEED_TIMESTAMP_FORMAT, raw)
}

fn parse_utc(value: &str, format: &str, original: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, format)
        .map(|naive| naive.and_utc())
        .map_err(|source| TrackerError::InvalidTimestamp {
            value: original.to_string(),
            source,
        })
}

/// A match time given as `YYYY-MM-DDTHH:MM`, interpreted as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchTime(pub DateTime<Utc>);

impl MatchTime {
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for MatchTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(INPUT_TIMESTAMP_FORMAT))
    }
}

impl FromStr for MatchTime {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_utc(s, INPUT_TIMESTAMP_FORMAT, s).map(Self)
    }
}
