//! Schedule overview: what is still to be played and where the table stands

use std::fmt;

use serde::Serialize;

use super::{
    common::{match_views, CommandContext, MatchView},
    standings::{standings_view_at, StandingsView},
};
use crate::{storage::TournamentStore, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleView {
    pub rounds_completed: i64,
    pub scheduled: Vec<MatchView>,
    pub standings: StandingsView,
}

impl fmt::Display for ScheduleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rounds completed: {}", self.rounds_completed)?;
        writeln!(f)?;
        writeln!(f, "Upcoming matches:")?;
        if self.scheduled.is_empty() {
            writeln!(f, "  none")?;
        }
        for game in &self.scheduled {
            writeln!(f, "  {}", game)?;
        }
        writeln!(f)?;
        writeln!(f, "Standings:")?;
        write!(f, "{}", self.standings)
    }
}

/// Every part of the view is evaluated against a single reading of the clock.
pub fn schedule_view(store: &TournamentStore) -> ScheduleView {
    let now = store.now();
    ScheduleView {
        rounds_completed: store.rounds_completed_at(now),
        scheduled: match_views(store.scheduled_games_at(now), now),
        standings: standings_view_at(store, now),
    }
}

/// Handle the schedule command
pub fn handle_schedule(ctx: &CommandContext) -> Result<()> {
    ctx.emit(&schedule_view(&ctx.store))
}
