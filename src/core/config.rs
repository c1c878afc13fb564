//! Runtime configuration: where the feed lives, how ids are handed out and
//! who is shown as an admin.

use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};
use tracing::debug;

use crate::error::{Result, TrackerError};

pub const DATA_PATH_ENV_VAR: &str = "FIXTURE_TRACKER_DATA";
pub const ADMINS_ENV_VAR: &str = "FIXTURE_TRACKER_ADMINS";
pub const DEFAULT_DATA_FILE: &str = "initial_data.json";

/// Admins shown in every round view. `FIXTURE_TRACKER_ADMINS` and `--admin` add to these.
pub const DEFAULT_ADMINS: [&str; 1] = ["league_admin"];

/// How new game and comment ids are allocated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum IdStrategy {
    /// Lowest id not held by any comment, for games and comments alike.
    ///
    /// Ids of deleted comments are reused, and a new game can take the id of
    /// an existing game (replacing it) because only comment ids are scanned.
    #[default]
    SharedLowestFree,
    /// Per-store counter starting one past the highest id held; never reuses ids.
    Monotonic,
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IdStrategy::SharedLowestFree => "shared-lowest-free",
            IdStrategy::Monotonic => "monotonic",
        };
        write!(f, "{}", s)
    }
}

/// Usernames displayed as admins. Display only, nothing is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminList(Vec<String>);

impl Default for AdminList {
    fn default() -> Self {
        Self::new(DEFAULT_ADMINS)
    }
}

impl AdminList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Parse a comma-separated list, ignoring blanks.
    pub fn from_env_value(value: &str) -> Self {
        Self::new(
            value
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        )
    }

    /// The default admins plus any named in `FIXTURE_TRACKER_ADMINS`.
    pub fn from_env() -> Self {
        let mut admins = Self::default();
        if let Ok(value) = std::env::var(ADMINS_ENV_VAR) {
            admins.extend(Self::from_env_value(&value).0);
        }
        admins
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, names: I) {
        for name in names {
            if !self.0.contains(&name) {
                self.0.push(name);
            }
        }
    }

    pub fn is_admin(&self, username: &str) -> bool {
        self.0.iter().any(|name| name == username)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

/// Store-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub id_strategy: IdStrategy,
    pub admins: AdminList,
    /// Add the sample comments after loading the feed.
    pub seed_comments: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            admins: AdminList::default(),
            seed_comments: true,
        }
    }
}

/// Path: ~/.local/share/fixture-tracker/initial_data.json (platform data dir)
pub fn default_data_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    });
    base.join("fixture-tracker").join(DEFAULT_DATA_FILE)
}

/// Pick the feed file: explicit path, then `FIXTURE_TRACKER_DATA`, then
/// `./initial_data.json`, then the platform data directory.
pub fn resolve_data_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if let Some(path) = std::env::var_os(DATA_PATH_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    let candidates = [PathBuf::from(DEFAULT_DATA_FILE), default_data_path()];
    candidates
        .into_iter()
        .find(|p| p.is_file())
        .inspect(|p| debug!(path = %p.display(), "using fixture data file"))
        .ok_or_else(|| TrackerError::MissingDataFile {
            env_var: DATA_PATH_ENV_VAR.to_string(),
        })
}
