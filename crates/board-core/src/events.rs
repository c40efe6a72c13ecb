//! Reaction events and observers
//!
//! Rows publish a [`ReactionChange`] after every toggle. Observers are the
//! one-way binding from the view-models to whatever displays or records
//! them.

use serde::Serialize;

use crate::models::CommentId;
use crate::row::Reaction;

/// Outcome of a single like/dislike toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReactionChange {
    pub comment_id: CommentId,
    pub before: Reaction,
    pub after: Reaction,
    /// Counters after the toggle
    pub likes: u32,
    pub dislikes: u32,
}

pub trait ReactionObserver {
    fn reacted(&self, change: &ReactionChange);
}

/// Observers in registration order
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Box<dyn ReactionObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Box<dyn ReactionObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn notify(&self, change: &ReactionChange) {
        for observer in &self.observers {
            observer.reacted(change);
        }
    }
}

/// Logs every change at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ReactionObserver for TracingObserver {
    fn reacted(&self, change: &ReactionChange) {
        tracing::debug!(
            target: "board::reactions",
            comment_id = change.comment_id,
            before = ?change.before,
            after = ?change.after,
            likes = change.likes,
            dislikes = change.dislikes,
            "Reaction toggled"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingObserver {
        label: &'static str,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl ReactionObserver for RecordingObserver {
        fn reacted(&self, change: &ReactionChange) {
            self.events
                .borrow_mut()
                .push(format!("{}: #{} {:?}", self.label, change.comment_id, change.after));
        }
    }

    fn change() -> ReactionChange {
        ReactionChange {
            comment_id: 4,
            before: Reaction::None,
            after: Reaction::Liked,
            likes: 11,
            dislikes: 5,
        }
    }

    #[test]
    fn test_notify_in_registration_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        registry.register(Box::new(RecordingObserver { label: "first", events: Rc::clone(&events) }));
        registry.register(Box::new(RecordingObserver { label: "second", events: Rc::clone(&events) }));
        registry.register(Box::new(TracingObserver));

        registry.notify(&change());

        assert_eq!(registry.observer_count(), 3);
        assert_eq!(
            *events.borrow(),
            vec!["first: #4 Liked".to_string(), "second: #4 Liked".to_string()]
        );
    }

    #[test]
    fn test_change_serializes() {
        let value = serde_json::to_value(change()).unwrap();
        assert_eq!(value["comment_id"], 4);
        assert_eq!(value["after"], "Liked");
    }
}
