//! Comment operations

use tracing::debug;

use super::{models::Comment, store::TournamentStore};
use crate::cli::types::{CommentId, RoundNum};
use crate::core::config::DEFAULT_ADMINS;
use crate::error::{Result, TrackerError};

/// Comments added to a freshly loaded tournament when seeding is enabled
pub const SAMPLE_COMMENTS: [(u32, &str, &str); 4] = [
    (1, "this is interesting", "random_user"),
    (2, "this is great", "admin_user"),
    (2, "i lost all my money betting on this round", "random_user"),
    (3, "wow, i feel like i saw these games last year", DEFAULT_ADMINS[0]),
];

impl TournamentStore {
    /// Add a comment stamped with the current time
    pub fn add_comment(
        &mut self,
        round_num: RoundNum,
        comment_text: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<CommentId> {
        let id = self.allocate_comment_id()?;
        let comment = Comment {
            id,
            round_num,
            comment_text: comment_text.into(),
            username: username.into(),
            date_created: self.now(),
        };
        debug!(comment_id = %id, round = %round_num, "adding comment");
        self.insert_comment(comment);
        Ok(id)
    }

    /// Replace a comment's text and refresh its timestamp
    pub fn edit_comment(
        &mut self,
        id: CommentId,
        new_text: impl Into<String>,
    ) -> Result<&Comment> {
        let now = self.now();
        let existing = self
            .comments
            .get_mut(&id)
            .ok_or(TrackerError::CommentNotFound { id })?;
        existing.comment_text = new_text.into();
        existing.date_created = now;
        debug!(comment_id = %id, "comment edited");
        Ok(&*existing)
    }

    /// Delete a comment. Unknown ids are ignored; returns whether anything was removed.
    pub fn remove_comment(&mut self, id: CommentId) -> bool {
        let removed = self.comments.remove(&id).is_some();
        if removed {
            debug!(comment_id = %id, "comment removed");
        }
        removed
    }

    pub fn comment(&self, id: CommentId) -> Result<&Comment> {
        self.comments
            .get(&id)
            .ok_or(TrackerError::CommentNotFound { id })
    }

    /// Comments on a round. Each call scans the store afresh.
    pub fn round_comments(&self, round_num: RoundNum) -> impl Iterator<Item = &Comment> + '_ {
        self.comments
            .values()
            .filter(move |comment| comment.round_num == round_num)
    }

    pub fn seed_sample_comments(&mut self) -> Result<()> {
        for (round, text, username) in SAMPLE_COMMENTS {
            self.add_comment(RoundNum::new(round), text, username)?;
        }
        Ok(())
    }
}
