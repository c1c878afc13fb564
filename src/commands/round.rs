//! Round view: the round's matches and its comments

use std::fmt;

use serde::Serialize;

use super::common::{match_views, CommandContext, MatchView};
use crate::{
    cli::types::RoundNum,
    core::AdminList,
    storage::{Comment, TournamentStore},
    Result,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentEntry {
    #[serde(flatten)]
    pub comment: Comment,
    pub is_admin: bool,
}

impl fmt::Display for CommentEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.comment;
        let badge = if self.is_admin { " (admin)" } else { "" };
        write!(
            f,
            "[{}] {}{} at {}: {}",
            c.id,
            c.username,
            badge,
            c.date_created.format("%Y-%m-%d %H:%M"),
            c.comment_text
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundView {
    pub round_num: RoundNum,
    pub games: Vec<MatchView>,
    pub comments: Vec<CommentEntry>,
}

impl fmt::Display for RoundView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Round {}", self.round_num)?;
        if self.games.is_empty() {
            writeln!(f, "  no matches")?;
        }
        for game in &self.games {
            writeln!(f, "  {}", game)?;
        }
        writeln!(f)?;
        writeln!(f, "Comments:")?;
        if self.comments.is_empty() {
            writeln!(f, "  none")?;
        }
        for comment in &self.comments {
            writeln!(f, "  {}", comment)?;
        }
        Ok(())
    }
}

pub fn round_view(store: &TournamentStore, admins: &AdminList, round_num: RoundNum) -> RoundView {
    let comments = store
        .round_comments(round_num)
        .map(|comment| CommentEntry {
            is_admin: admins.is_admin(&comment.username),
            comment: comment.clone(),
        })
        .collect();

    RoundView {
        round_num,
        games: match_views(store.round_games(round_num), store.now()),
        comments,
    }
}

/// Handle the round command
pub fn handle_round(ctx: &CommandContext, round_num: RoundNum) -> Result<()> {
    ctx.emit(&round_view(&ctx.store, &ctx.config.admins, round_num))
}
