use std::rc::Rc;

use crate::models::{Comment, CommentId, User};
use crate::sort::{sort_comments, SortCriterion};

/// The comments on display, in display order, plus the users of the
/// refresh that produced them.
#[derive(Debug, Default)]
pub struct CommentStore {
    users: Vec<Rc<User>>,
    comments: Vec<Comment>,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every user and comment
    pub fn clear(&mut self) {
        self.users.clear();
        self.comments.clear();
    }

    /// Replace the whole data set
    pub fn replace(&mut self, users: Vec<Rc<User>>, comments: Vec<Comment>) {
        self.users = users;
        self.comments = comments;
    }

    pub fn sort_by(&mut self, criterion: SortCriterion) {
        sort_comments(&mut self.comments, criterion);
    }

    pub fn users(&self) -> &[Rc<User>] {
        &self.users
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: CommentId) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}
