//! Errors raised by the directory queries.
//!
//! The HTTP layer maps [`DirectoryError::NotFound`] to `404` and every other
//! variant to a generic `500`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("lawyer not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("lawyer {id} has a malformed expertise column: {source}")]
    CorruptExpertise {
        id: i64,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode expertise: {0}")]
    EncodeExpertise(#[source] serde_json::Error),
}

impl DirectoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound(_))
    }
}
