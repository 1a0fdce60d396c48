//! Book Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("Invalid book id: {0}")]
    InvalidId(String),

    #[error("Title is required")]
    MissingTitle,

    #[error("Author is required")]
    MissingAuthor,

    #[error("Invalid reading progress: {0}")]
    InvalidProgress(String),

    #[error("Invalid chapter list: {0}")]
    InvalidChapters(String),
}
