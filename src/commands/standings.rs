//! Standings table command

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::common::{format_signed, CommandContext};
use crate::{standings::TeamScore, storage::TournamentStore, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub position: usize,
    #[serde(flatten)]
    pub team: TeamScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsView {
    pub evaluated_at: DateTime<Utc>,
    pub rows: Vec<StandingsRow>,
}

impl StandingsView {
    pub fn from_table(table: Vec<TeamScore>, evaluated_at: DateTime<Utc>) -> Self {
        let rows = table
            .into_iter()
            .enumerate()
            .map(|(i, team)| StandingsRow {
                position: i + 1,
                team,
            })
            .collect();
        Self { evaluated_at, rows }
    }
}

impl fmt::Display for StandingsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No matches played yet");
        }
        let width = self
            .rows
            .iter()
            .map(|r| r.team.team_name.len())
            .max()
            .unwrap_or(0);
        for row in &self.rows {
            writeln!(
                f,
                "{:>2}. {:<width$} {:>3} pts {:>4}",
                row.position,
                row.team.team_name,
                row.team.points,
                format_signed(row.team.goal_diff),
                width = width,
            )?;
        }
        Ok(())
    }
}

pub fn standings_view(store: &TournamentStore) -> StandingsView {
    standings_view_at(store, store.now())
}

pub fn standings_view_at(store: &TournamentStore, now: DateTime<Utc>) -> StandingsView {
    StandingsView::from_table(store.standings_at(now), now)
}

/// Handle the standings command
pub fn handle_standings(ctx: &CommandContext) -> Result<()> {
    ctx.emit(&standings_view(&ctx.store))
}
