//! # board-core
//!
//! The model behind the comment board: synthetic users and comments,
//! the comment store, sorting, and the like/dislike row view-models.
//!
//! Everything here is single-threaded and synchronous. The terminal front
//! end lives in the `comment-board` binary; this crate has no knowledge of
//! how rows are drawn.
//!
//! ```rust
//! use board_core::prelude::*;
//!
//! let generator = DataGenerator::seeded(GeneratorConfig::default(), 7);
//! let mut board = BoardController::new(generator, IconSet::default());
//! board.refresh();
//!
//! let id = board.rows()[0].comment_id();
//! let change = board.toggle_like(id).unwrap();
//! assert_eq!(change.after, Reaction::Liked);
//!
//! board.sort_by(SortCriterion::Likes);
//! assert!(board.row(id).unwrap().has_liked());
//! ```

pub mod assets;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod fake_data;
pub mod generator;
pub mod logging;
pub mod models;
pub mod row;
pub mod sequence;
pub mod sort;
pub mod store;

pub use assets::{AssetError, Icon, IconKind, IconSet};
pub use config::{BoardConfig, ConfigError, ConfigSource, CountRange, GeneratorConfig};
pub use controller::{BoardController, RefreshSummary};
pub use error::{BoardError, BoardResult};
pub use events::{ObserverRegistry, ReactionChange, ReactionObserver, TracingObserver};
pub use generator::DataGenerator;
pub use logging::LogConfig;
pub use models::{Comment, CommentId, User, UserId};
pub use row::{CommentRow, Reaction};
pub use sequence::IdSequence;
pub use sort::{sort_comments, SortCriterion};
pub use store::CommentStore;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BoardController, BoardError, BoardResult, CommentRow, DataGenerator, GeneratorConfig, IconKind,
        IconSet, Reaction, ReactionChange, ReactionObserver, SortCriterion,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
