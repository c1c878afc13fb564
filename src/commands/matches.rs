//! Match commands: show, add and edit scores

use tracing::info;

use super::{
    common::{CommandContext, MatchView},
    round::round_view,
};
use crate::{
    cli::{types::GameId, ScoreArgs},
    storage::NewGame,
    Result,
};

/// Handle the show-match command
pub fn handle_show_match(ctx: &CommandContext, match_id: GameId) -> Result<()> {
    let game = ctx.store.game(match_id)?;
    ctx.emit(&MatchView::new(game, ctx.store.now()))
}

/// Add a match and show the round it landed in
pub fn handle_add_match(ctx: &mut CommandContext, new_game: NewGame) -> Result<()> {
    let round_num = new_game.round_num;
    let id = ctx.store.add_game(new_game)?;
    info!(match_id = %id, round = %round_num, "match added");

    ctx.emit(&round_view(&ctx.store, &ctx.config.admins, round_num))
}

/// Replace a match's scores and show its round
pub fn handle_edit_match(ctx: &mut CommandContext, match_id: GameId, scores: ScoreArgs) -> Result<()> {
    let round_num = ctx
        .store
        .edit_game_score(match_id, scores.team_1_score, scores.team_2_score)?
        .round_num;
    info!(match_id = %match_id, "match score updated");

    ctx.emit(&round_view(&ctx.store, &ctx.config.admins, round_num))
}
