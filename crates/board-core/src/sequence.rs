//! Auto-increment id sequences.
//!
//! Each entity type gets its own sequence, owned by whoever creates the
//! entities. Refreshing the board never resets a sequence, so ids stay
//! unique for the lifetime of the owner.

use std::sync::atomic::{AtomicU64, Ordering};

const FIRST_ID: u64 = 1;

/// Sequence generator for unique, strictly increasing ids
#[derive(Debug)]
pub struct IdSequence {
    current: AtomicU64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::starting_at(FIRST_ID)
    }

    /// Start handing out ids from `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            current: AtomicU64::new(first),
        }
    }

    pub fn next(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
