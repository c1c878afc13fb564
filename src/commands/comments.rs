//! Comment commands: add, edit and delete

use tracing::info;

use super::{common::CommandContext, round::round_view};
use crate::{
    cli::types::{CommentId, RoundNum},
    Result,
};

/// Handle the add-comment command
pub fn handle_add_comment(
    ctx: &mut CommandContext,
    round_num: RoundNum,
    text: String,
    username: String,
) -> Result<()> {
    let id = ctx.store.add_comment(round_num, text, username)?;
    info!(comment_id = %id, round = %round_num, "comment added");

    ctx.emit(&round_view(&ctx.store, &ctx.config.admins, round_num))
}

/// Handle the edit-comment command
pub fn handle_edit_comment(ctx: &mut CommandContext, comment_id: CommentId, text: String) -> Result<()> {
    let round_num = ctx.store.edit_comment(comment_id, text)?.round_num;
    info!(comment_id = %comment_id, "comment edited");

    ctx.emit(&round_view(&ctx.store, &ctx.config.admins, round_num))
}

/// Handle the delete-comment command. Deleting an unknown id is not an error.
pub fn handle_delete_comment(
    ctx: &mut CommandContext,
    comment_id: CommentId,
    round_num: RoundNum,
) -> Result<()> {
    if ctx.store.remove_comment(comment_id) {
        info!(comment_id = %comment_id, "comment deleted");
    } else {
        info!(comment_id = %comment_id, "no comment to delete");
    }

    ctx.emit(&round_view(&ctx.store, &ctx.config.admins, round_num))
}
