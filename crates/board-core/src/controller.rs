//! Board controller
//!
//! Owns the generator, the comment store and the row view-models, and
//! wires refresh, sort and the like/dislike toggles together. Every
//! operation runs to completion before returning.

use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;

use crate::assets::IconSet;
use crate::error::{BoardError, BoardResult};
use crate::events::{ObserverRegistry, ReactionChange, ReactionObserver};
use crate::generator::DataGenerator;
use crate::models::{Comment, CommentId, User};
use crate::row::{CommentRow, Reaction};
use crate::sort::SortCriterion;
use crate::store::CommentStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    pub users: usize,
    pub comments: usize,
}

#[derive(Debug, Clone, Copy)]
enum Toggle {
    Like,
    Dislike,
}

#[derive(Serialize)]
struct BoardSnapshot<'a> {
    sort: SortCriterion,
    users: usize,
    comments: &'a [Comment],
}

pub struct BoardController {
    generator: DataGenerator,
    store: CommentStore,
    rows: Vec<CommentRow>,
    // Toggle state per comment, so a re-sort keeps what the user pressed.
    reactions: HashMap<CommentId, Reaction>,
    criterion: SortCriterion,
    icons: IconSet,
    observers: ObserverRegistry,
}

impl BoardController {
    /// An empty board. Call [`BoardController::refresh`] to fill it.
    pub fn new(generator: DataGenerator, icons: IconSet) -> Self {
        Self {
            generator,
            store: CommentStore::new(),
            rows: Vec::new(),
            reactions: HashMap::new(),
            criterion: SortCriterion::Default,
            icons,
            observers: ObserverRegistry::new(),
        }
    }

    /// Discard everything and generate a new board, sorted by id
    pub fn refresh(&mut self) -> RefreshSummary {
        self.store.clear();
        self.reactions.clear();

        let users = self.generator.generate_users();
        let comments = self.generator.generate_comments(&users);
        self.store.replace(users, comments);

        self.criterion = SortCriterion::Default;
        self.store.sort_by(self.criterion);
        self.redraw();

        let summary = RefreshSummary {
            users: self.store.users().len(),
            comments: self.store.len(),
        };
        tracing::info!(
            target: "board::controller",
            users = summary.users,
            comments = summary.comments,
            "Board refreshed"
        );
        summary
    }

    pub fn sort_by(&mut self, criterion: SortCriterion) {
        self.criterion = criterion;
        self.store.sort_by(criterion);
        self.redraw();
        tracing::debug!(target: "board::controller", sort = %criterion, "Board sorted");
    }

    pub fn toggle_like(&mut self, id: CommentId) -> BoardResult<ReactionChange> {
        self.toggle(id, Toggle::Like)
    }

    pub fn toggle_dislike(&mut self, id: CommentId) -> BoardResult<ReactionChange> {
        self.toggle(id, Toggle::Dislike)
    }

    fn toggle(&mut self, id: CommentId, toggle: Toggle) -> BoardResult<ReactionChange> {
        let comment = self.store.get_mut(id).ok_or(BoardError::CommentNotFound(id))?;
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.comment_id() == id)
            .ok_or(BoardError::CommentNotFound(id))?;

        let change = match toggle {
            Toggle::Like => row.toggle_like(comment),
            Toggle::Dislike => row.toggle_dislike(comment),
        };

        match change.after {
            Reaction::None => self.reactions.remove(&id),
            reaction => self.reactions.insert(id, reaction),
        };

        self.observers.notify(&change);
        Ok(change)
    }

    /// Rebuild every row in store order
    fn redraw(&mut self) {
        self.rows = self
            .store
            .comments()
            .iter()
            .map(|comment| {
                let reaction = self.reactions.get(&comment.id).copied().unwrap_or_default();
                CommentRow::with_reaction(comment, reaction)
            })
            .collect();
    }

    pub fn subscribe(&mut self, observer: Box<dyn ReactionObserver>) {
        self.observers.register(observer);
        tracing::debug!(
            target: "board::controller",
            observers = self.observers.observer_count(),
            "Reaction observer subscribed"
        );
    }

    pub fn rows(&self) -> &[CommentRow] {
        &self.rows
    }

    pub fn row(&self, id: CommentId) -> Option<&CommentRow> {
        self.rows.iter().find(|row| row.comment_id() == id)
    }

    pub fn comments(&self) -> &[Comment] {
        self.store.comments()
    }

    pub fn users(&self) -> &[Rc<User>] {
        self.store.users()
    }

    pub fn criterion(&self) -> SortCriterion {
        self.criterion
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    /// The board in display order as pretty JSON
    pub fn to_json(&self) -> BoardResult<String> {
        let snapshot = BoardSnapshot {
            sort: self.criterion,
            users: self.store.users().len(),
            comments: self.store.comments(),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }
}
