//! Shared database types for the domain repositories

use crate::error::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found".to_string()),
            RepositoryError::Connection(e) => Error::Database(e),
        }
    }
}
