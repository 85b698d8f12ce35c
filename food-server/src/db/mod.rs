//! Database Module
//!
//! Generic document-store access on top of SurrealDB. Each record type lives
//! in its own table (collection); documents are keyed by [`shared::DocumentId`]
//! hex strings and surfaced to callers with a plain string `id`.

pub mod store;

pub use store::{DocumentStore, Filter, StoreConfig};

use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database not available. Check DATABASE_URL and DATABASE_NAME environment variables.")]
    Unavailable,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Unavailable => AppError::database(err.to_string()),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
