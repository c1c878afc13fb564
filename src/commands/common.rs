//! Shared context and output helpers for every command.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    cli::GlobalOpts,
    core::{resolve_data_path, AdminList, FixedClock, TrackerConfig},
    feed::load_tournament,
    storage::{Game, TournamentStore},
    Result,
};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Everything a command needs: the loaded store, the config it was loaded
/// with and the output mode.
#[derive(Debug)]
pub struct CommandContext {
    pub store: TournamentStore,
    pub config: TrackerConfig,
    pub as_json: bool,
}

impl CommandContext {
    pub fn new(store: TournamentStore, config: TrackerConfig, as_json: bool) -> Self {
        Self {
            store,
            config,
            as_json,
        }
    }

    /// Resolve the feed path, build the config and load the tournament
    pub fn from_opts(opts: GlobalOpts) -> Result<Self> {
        let path = resolve_data_path(opts.data)?;

        let mut admins = AdminList::from_env();
        admins.extend(opts.admins);

        let config = TrackerConfig {
            id_strategy: opts.id_strategy,
            admins,
            seed_comments: !opts.no_seed_comments,
        };

        let mut store = load_tournament(&path, &config)?;
        if let Some(at) = opts.at {
            store = store.with_clock(FixedClock(at.as_datetime()));
        }

        Ok(Self::new(store, config, opts.json))
    }

    /// Print a view as pretty JSON or as text lines
    pub fn emit<V: Serialize + fmt::Display>(&self, view: &V) -> Result<()> {
        if self.as_json {
            println!("{}", serde_json::to_string_pretty(view)?); // tarpaulin::skip
        } else {
            print!("{}", view); // tarpaulin::skip
        }
        Ok(())
    }
}

/// A game together with its played status at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    #[serde(flatten)]
    pub game: Game,
    pub played: bool,
}

impl MatchView {
    pub fn new(game: &Game, now: DateTime<Utc>) -> Self {
        Self {
            game: game.clone(),
            played: game.is_played(now),
        }
    }
}

impl fmt::Display for MatchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = &self.game;
        if self.played {
            write!(
                f,
                "#{} [round {}] {} {} - {} {} ({})",
                game.id,
                game.round_num,
                game.team_1,
                game.team_1_score,
                game.team_2_score,
                game.team_2,
                game.match_time.format(TIME_FORMAT),
            )
        } else {
            write!(
                f,
                "#{} [round {}] {} vs {} (scheduled {})",
                game.id,
                game.round_num,
                game.team_1,
                game.team_2,
                game.match_time.format(TIME_FORMAT),
            )
        }
    }
}

/// Games sorted by kick-off, then id, as match views.
pub fn match_views<'a, I>(games: I, now: DateTime<Utc>) -> Vec<MatchView>
where
    I: IntoIterator<Item = &'a Game>,
{
    let mut views: Vec<MatchView> = games.into_iter().map(|g| MatchView::new(g, now)).collect();
    views.sort_by_key(|v| (v.game.match_time, v.game.id));
    views
}

pub fn format_signed(value: i64) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{GameId, RoundNum};
    use chrono::{Duration, TimeZone};

    fn game(id: u32, hours_from_now: i64) -> Game {
        Game {
            id: GameId::new(id),
            round_num: RoundNum::new(1),
            team_1: "Lions".to_string(),
            team_2: "Tigers".to_string(),
            team_1_score: 2,
            team_2_score: 1,
            match_time: now() + Duration::hours(hours_from_now),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_match_view_played() {
        let view = MatchView::new(&game(3, -1), now());
        assert!(view.played);
        assert_eq!(
            view.to_string(),
            "#3 [round 1] Lions 2 - 1 Tigers (2024-06-01 11:00 UTC)"
        );
    }

    #[test]
    fn test_match_view_scheduled_hides_score() {
        let view = MatchView::new(&game(4, 2), now());
        assert!(!view.played);
        assert_eq!(
            view.to_string(),
            "#4 [round 1] Lions vs Tigers (scheduled 2024-06-01 14:00 UTC)"
        );
    }

    #[test]
    fn test_match_view_json_is_flat() {
        let value = serde_json::to_value(MatchView::new(&game(3, -1), now())).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["team_1"], "Lions");
        assert_eq!(value["played"], true);
    }

    #[test]
    fn test_match_views_sorted_by_time() {
        let games = vec![game(1, 5), game(2, -5), game(3, 0)];
        let ids: Vec<u32> = match_views(&games, now())
            .iter()
            .map(|v| v.game.id.as_u32())
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(3), "+3");
        assert_eq!(format_signed(0), "0");
        assert_eq!(format_signed(-2), "-2");
    }
}
