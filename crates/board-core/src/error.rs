use thiserror::Error;

use crate::assets::AssetError;
use crate::config::ConfigError;
use crate::models::CommentId;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Comment #{0} is not on the board")]
    CommentNotFound(CommentId),

    #[error("Unknown sort criterion '{0}'. Expected one of: Default, Likes, Dislikes, Newest, Oldest")]
    UnknownSortCriterion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BoardResult<T> = Result<T, BoardError>;
