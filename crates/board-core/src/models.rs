use std::rc::Rc;

use chrono::NaiveDate;
use serde::Serialize;

pub type UserId = u64;
pub type CommentId = u64;

/// A comment author. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A comment on the board.
///
/// The author is shared with the user set of the refresh that produced the
/// comment. Only `likes` and `dislikes` change after generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub body: String,
    pub author: Rc<User>,
    pub likes: u32,
    pub dislikes: u32,
    pub created_at: NaiveDate,
}

impl Comment {
    pub fn new(
        id: CommentId,
        body: impl Into<String>,
        author: Rc<User>,
        created_at: NaiveDate,
        likes: u32,
        dislikes: u32,
    ) -> Self {
        Self {
            id,
            body: body.into(),
            author,
            likes,
            dislikes,
            created_at,
        }
    }

    pub fn author_id(&self) -> UserId {
        self.author.id
    }

    pub fn author_name(&self) -> &str {
        &self.author.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_shares_author() {
        let author = Rc::new(User::new(7, "Grace Harris"));
        let date = NaiveDate::from_ymd_opt(2021, 3, 14).unwrap();
        let comment = Comment::new(1, "Lorem ipsum.", Rc::clone(&author), date, 10, 5);

        assert_eq!(comment.author_id(), 7);
        assert_eq!(comment.author_name(), "Grace Harris");
        assert_eq!(Rc::strong_count(&author), 2);
    }

    #[test]
    fn test_comment_serializes_author_inline() {
        let author = Rc::new(User::new(3, "Liam Young"));
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let comment = Comment::new(9, "Dolor sit amet.", author, date, 1, 2);

        let value = serde_json::to_value(&comment).unwrap();
        assert_eq!(value["author"]["name"], "Liam Young");
        assert_eq!(value["created_at"], "2020-01-01");
        assert_eq!(value["likes"], 1);
    }
}
