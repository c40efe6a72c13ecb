use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::BoardError;
use crate::models::Comment;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            OrderDirection::Asc => ordering,
            OrderDirection::Desc => ordering.reverse(),
        }
    }
}

/// The options of the "Sort by" selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SortCriterion {
    #[default]
    Default,
    Likes,
    Dislikes,
    Newest,
    Oldest,
}

impl SortCriterion {
    /// Selector order
    pub const ALL: [SortCriterion; 5] = [
        SortCriterion::Default,
        SortCriterion::Likes,
        SortCriterion::Dislikes,
        SortCriterion::Newest,
        SortCriterion::Oldest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortCriterion::Default => "Default",
            SortCriterion::Likes => "Likes",
            SortCriterion::Dislikes => "Dislikes",
            SortCriterion::Newest => "Newest",
            SortCriterion::Oldest => "Oldest",
        }
    }

    pub fn direction(self) -> OrderDirection {
        match self {
            SortCriterion::Default | SortCriterion::Oldest => OrderDirection::Asc,
            SortCriterion::Likes | SortCriterion::Dislikes | SortCriterion::Newest => OrderDirection::Desc,
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// The next option in the selector, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Compare two comments under this criterion. Equal keys fall back to
    /// ascending id so the order is total.
    pub fn compare(self, a: &Comment, b: &Comment) -> Ordering {
        let primary = match self {
            SortCriterion::Default => Ordering::Equal,
            SortCriterion::Likes => a.likes.cmp(&b.likes),
            SortCriterion::Dislikes => a.dislikes.cmp(&b.dislikes),
            SortCriterion::Newest | SortCriterion::Oldest => a.created_at.cmp(&b.created_at),
        };

        self.direction()
            .apply(primary)
            .then_with(|| a.id.cmp(&b.id))
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortCriterion {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BoardError::UnknownSortCriterion(s.to_string()))
    }
}

/// Reorder `comments` in place
pub fn sort_comments(comments: &mut [Comment], criterion: SortCriterion) {
    comments.sort_by(|a, b| criterion.compare(a, b));
}
