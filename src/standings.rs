//! Standings computation over played games

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::storage::{Game, Outcome};


pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

/// One row of the standings table. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub team_name: String,
    pub points: u32,
    pub goal_diff: i64,
}

impl TeamScore {
    pub fn new(team_name: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            points: 0,
            goal_diff: 0,
        }
    }
}

/// Rank every team that appears in a game played by `now`.
///
/// Rows are ordered by points, then goal difference, both descending. Teams
/// level on both keep the order they were first seen in, which callers
/// should not rely on.
pub fn compute_standings<'a, I>(games: I, now: DateTime<Utc>) -> Vec<TeamScore>
where
    I: IntoIterator<Item = &'a Game>,
{
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut table: Vec<TeamScore> = Vec::new();

    for game in games.into_iter().filter(|game| game.is_played(now)) {
        let home = team_slot(&mut slots, &mut table, &game.team_1);
        let away = team_slot(&mut slots, &mut table, &game.team_2);

        let diff = i64::from(game.team_1_score) - i64::from(game.team_2_score);
        table[home].goal_diff += diff;
        table[away].goal_diff -= diff;

        match game.outcome() {
            Outcome::Team1Win => table[home].points += POINTS_FOR_WIN,
            Outcome::Team2Win => table[away].points += POINTS_FOR_WIN,
            Outcome::Draw => {
                table[home].points += POINTS_FOR_DRAW;
                table[away].points += POINTS_FOR_DRAW;
            }
        }
    }

    table.sort_by(|a, b| (b.points, b.goal_diff).cmp(&(a.points, a.goal_diff)));
    table
}

fn team_slot<'a>(
    slots: &mut HashMap<&'a str, usize>,
    table: &mut Vec<TeamScore>,
    team_name: &'a str,
) -> usize {
    *slots.entry(team_name).or_insert_with(|| {
        table.push(TeamScore::new(team_name));
        table.len() - 1
    })
}
