//! Per-comment row view-models
//!
//! A [`CommentRow`] is everything a view needs to draw one comment, plus
//! the like/dislike toggle state. Toggles mutate the comment handed in and
//! re-read the counters from it afterwards, so a row never disagrees with
//! its comment.

use chrono::NaiveDate;
use serde::Serialize;

use crate::events::ReactionChange;
use crate::models::{Comment, CommentId};

/// Toggle state of a row. At most one of liked/disliked is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Reaction {
    #[default]
    None,
    Liked,
    Disliked,
}

impl Reaction {
    pub fn is_liked(self) -> bool {
        matches!(self, Reaction::Liked)
    }

    pub fn is_disliked(self) -> bool {
        matches!(self, Reaction::Disliked)
    }
}

/// "M/D/YYYY"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentRow {
    comment_id: CommentId,
    title: String,
    author: String,
    body: String,
    date_label: String,
    likes: u32,
    dislikes: u32,
    reaction: Reaction,
}

impl CommentRow {
    pub fn new(comment: &Comment) -> Self {
        Self::with_reaction(comment, Reaction::None)
    }

    /// Rebuild a row that already carries a reaction (e.g. after a re-sort)
    pub fn with_reaction(comment: &Comment, reaction: Reaction) -> Self {
        Self {
            comment_id: comment.id,
            title: format!("Comment #{}", comment.id),
            author: comment.author_name().to_string(),
            body: comment.body.clone(),
            date_label: format!("Date: {}", format_short_date(comment.created_at)),
            likes: comment.likes,
            dislikes: comment.dislikes,
            reaction,
        }
    }

    pub fn comment_id(&self) -> CommentId {
        self.comment_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn date_label(&self) -> &str {
        &self.date_label
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }

    pub fn dislikes(&self) -> u32 {
        self.dislikes
    }

    pub fn likes_label(&self) -> String {
        format!("Likes: {}", self.likes)
    }

    pub fn dislikes_label(&self) -> String {
        format!("Dislikes: {}", self.dislikes)
    }

    pub fn reaction(&self) -> Reaction {
        self.reaction
    }

    pub fn has_liked(&self) -> bool {
        self.reaction.is_liked()
    }

    pub fn has_disliked(&self) -> bool {
        self.reaction.is_disliked()
    }

    pub fn toggle_like(&mut self, comment: &mut Comment) -> ReactionChange {
        debug_assert_eq!(comment.id, self.comment_id);
        let before = self.reaction;

        self.reaction = match before {
            Reaction::Liked => {
                decrement(&mut comment.likes);
                Reaction::None
            }
            Reaction::Disliked => {
                comment.likes = comment.likes.saturating_add(1);
                decrement(&mut comment.dislikes);
                Reaction::Liked
            }
            Reaction::None => {
                comment.likes = comment.likes.saturating_add(1);
                Reaction::Liked
            }
        };

        self.sync(comment);
        self.change(before)
    }

    pub fn toggle_dislike(&mut self, comment: &mut Comment) -> ReactionChange {
        debug_assert_eq!(comment.id, self.comment_id);
        let before = self.reaction;

        self.reaction = match before {
            Reaction::Disliked => {
                decrement(&mut comment.dislikes);
                Reaction::None
            }
            Reaction::Liked => {
                comment.dislikes = comment.dislikes.saturating_add(1);
                decrement(&mut comment.likes);
                Reaction::Disliked
            }
            Reaction::None => {
                comment.dislikes = comment.dislikes.saturating_add(1);
                Reaction::Disliked
            }
        };

        self.sync(comment);
        self.change(before)
    }

    /// Refresh both counter labels from the comment
    pub fn sync(&mut self, comment: &Comment) {
        self.likes = comment.likes;
        self.dislikes = comment.dislikes;
    }

    fn change(&self, before: Reaction) -> ReactionChange {
        ReactionChange {
            comment_id: self.comment_id,
            before,
            after: self.reaction,
            likes: self.likes,
            dislikes: self.dislikes,
        }
    }
}

// Only reachable after this row's own increment, so the counter is >= 1.
fn decrement(counter: &mut u32) {
    debug_assert!(*counter > 0, "reaction counter would drop below zero");
    *counter = counter.saturating_sub(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use std::rc::Rc;

    fn comment(likes: u32, dislikes: u32) -> Comment {
        let author = Rc::new(User::new(12, "Nadia Novak"));
        let date = NaiveDate::from_ymd_opt(2023, 11, 5).unwrap();
        Comment::new(31, "Ut enim ad minim veniam.", author, date, likes, dislikes)
    }

    #[test]
    fn test_row_labels() {
        let comment = comment(10, 5);
        let row = CommentRow::new(&comment);

        assert_eq!(row.title(), "Comment #31");
        assert_eq!(row.author(), "Nadia Novak");
        assert_eq!(row.body(), "Ut enim ad minim veniam.");
        assert_eq!(row.date_label(), "Date: 11/5/2023");
        assert_eq!(row.likes_label(), "Likes: 10");
        assert_eq!(row.dislikes_label(), "Dislikes: 5");
        assert!(!row.has_liked());
        assert!(!row.has_disliked());
    }

    #[test]
    fn test_like_twice_restores() {
        let mut comment = comment(10, 5);
        let mut row = CommentRow::new(&comment);

        row.toggle_like(&mut comment);
        assert_eq!(comment.likes, 11);
        assert!(row.has_liked());

        let change = row.toggle_like(&mut comment);
        assert_eq!(comment.likes, 10);
        assert_eq!(comment.dislikes, 5);
        assert!(!row.has_liked());
        assert_eq!(change.before, Reaction::Liked);
        assert_eq!(change.after, Reaction::None);
    }

    #[test]
    fn test_like_while_disliked_switches() {
        let mut comment = comment(10, 5);
        let mut row = CommentRow::new(&comment);

        row.toggle_dislike(&mut comment);
        assert_eq!((comment.likes, comment.dislikes), (10, 6));

        let change = row.toggle_like(&mut comment);
        assert_eq!((comment.likes, comment.dislikes), (11, 5));
        assert!(row.has_liked());
        assert!(!row.has_disliked());
        assert_eq!(change.likes, 11);
        assert_eq!(change.dislikes, 5);
    }

    #[test]
    fn test_like_dislike_dislike_scenario() {
        let mut comment = comment(10, 5);
        let mut row = CommentRow::new(&comment);

        row.toggle_like(&mut comment);
        assert_eq!((comment.likes, comment.dislikes), (11, 5));
        assert!(row.has_liked());

        row.toggle_dislike(&mut comment);
        assert_eq!((comment.likes, comment.dislikes), (10, 6));
        assert!(!row.has_liked());
        assert!(row.has_disliked());

        row.toggle_dislike(&mut comment);
        assert_eq!((comment.likes, comment.dislikes), (10, 5));
        assert!(!row.has_disliked());
        assert_eq!(row.reaction(), Reaction::None);
    }

    #[test]
    fn test_dislike_twice_leaves_likes_alone() {
        let mut comment = comment(3, 1);
        let mut row = CommentRow::new(&comment);

        row.toggle_dislike(&mut comment);
        row.toggle_dislike(&mut comment);

        assert_eq!((comment.likes, comment.dislikes), (3, 1));
        assert_eq!(row.dislikes_label(), "Dislikes: 1");
    }

    #[test]
    fn test_labels_follow_comment() {
        let mut comment = comment(0, 0);
        let mut row = CommentRow::new(&comment);

        row.toggle_like(&mut comment);
        assert_eq!(row.likes_label(), "Likes: 1");
        row.toggle_dislike(&mut comment);
        assert_eq!(row.likes_label(), "Likes: 0");
        assert_eq!(row.dislikes_label(), "Dislikes: 1");
    }

    #[test]
    fn test_row_with_reaction() {
        let comment = comment(4, 4);
        let row = CommentRow::with_reaction(&comment, Reaction::Disliked);

        assert!(row.has_disliked());
        assert!(!row.has_liked());
    }
}
