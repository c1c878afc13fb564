//! CLI argument definitions and parsing structures.

use super::types::{CommentId, GameId, MatchTime, RoundNum};
use crate::core::IdStrategy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Options shared by every subcommand
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Fixture feed file (or set `FIXTURE_TRACKER_DATA` env var).
    #[clap(long, global = true)]
    pub data: Option<PathBuf>,

    /// How ids are assigned to new matches and comments.
    #[clap(long, value_enum, global = true, default_value_t = IdStrategy::default())]
    pub id_strategy: IdStrategy,

    /// Username shown as an admin (repeatable); adds to `FIXTURE_TRACKER_ADMINS`.
    #[clap(long = "admin", global = true)]
    pub admins: Vec<String>,

    /// Skip the sample comments normally added after loading.
    #[clap(long, global = true)]
    pub no_seed_comments: bool,

    /// Evaluate as if the current time were this (YYYY-MM-DDTHH:MM, UTC).
    #[clap(long, global = true)]
    pub at: Option<MatchTime>,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,
}

/// Scores entered for a match
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Goals scored by the home team.
    #[clap(long = "team-1-score")]
    pub team_1_score: u32,

    /// Goals scored by the away team.
    #[clap(long = "team-2-score")]
    pub team_2_score: u32,
}

#[derive(Debug, Parser)]
#[clap(name = "fixture-tracker", about = "Round-robin tournament fixture tracker")]
pub struct Tracker {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Upcoming matches, rounds completed so far and the current standings.
    Schedule,

    /// Standings table over every match played so far.
    Standings,

    /// Matches and comments for one round.
    Round {
        /// Round number.
        round: RoundNum,
    },

    /// Show a single match.
    ShowMatch {
        /// Match id.
        match_id: GameId,
    },

    /// Add a match, then show its round.
    AddMatch {
        /// Round the match belongs to.
        #[clap(long)]
        round: RoundNum,

        /// Home team name.
        #[clap(long = "team-1")]
        team_1: String,

        /// Away team name.
        #[clap(long = "team-2")]
        team_2: String,

        #[clap(flatten)]
        scores: ScoreArgs,

        /// Kick-off time (YYYY-MM-DDTHH:MM, UTC).
        #[clap(long)]
        match_time: MatchTime,
    },

    /// Replace a match's scores, then show its round.
    EditMatch {
        /// Match id.
        #[clap(long)]
        match_id: GameId,

        #[clap(flatten)]
        scores: ScoreArgs,
    },

    /// Comment on a round, then show it.
    AddComment {
        /// Round being commented on.
        #[clap(long)]
        round: RoundNum,

        /// Comment text.
        #[clap(long)]
        text: String,

        /// Author's username.
        #[clap(long)]
        username: String,
    },

    /// Replace a comment's text, then show its round.
    EditComment {
        /// Comment id.
        #[clap(long)]
        comment_id: CommentId,

        /// New comment text.
        #[clap(long)]
        text: String,
    },

    /// Delete a comment (unknown ids are ignored), then show the round.
    DeleteComment {
        /// Comment id.
        #[clap(long)]
        comment_id: CommentId,

        /// Round to show afterwards.
        #[clap(long)]
        round: RoundNum,
    },
}
