//! Repository error types.
//!
//! Missing records and rejected payloads are not errors: the repository
//! contract reports them through `Option` and `bool` outcomes. These errors
//! cover seed loading and backend faults only.

use crate::person::PersonId;
use std::path::PathBuf;

/// Errors that can occur while building or talking to a person repository.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The seed file could not be read.
    #[error("Failed to read seed file {}: {source}", path.display())]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed source is not a JSON array of objects.
    #[error("Failed to parse seed data: {0}")]
    SeedParse(#[from] serde_json::Error),

    /// A seed record is missing its integer id or is not an object.
    #[error("Malformed seed record at index {index}: {message}")]
    MalformedRecord { index: usize, message: String },

    /// Two seed records share an id.
    #[error("Duplicate person id {id} in seed data")]
    DuplicateId { id: PersonId },

    /// No identifier is left to allocate after `max_id`.
    #[error("Person id space exhausted after {max_id}")]
    IdSpaceExhausted { max_id: PersonId },

    /// The backend is temporarily unavailable.
    #[error("Repository unavailable: {message}")]
    Unavailable { message: String },
}

impl RepositoryError {
    /// Create an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a malformed record error.
    pub fn malformed_record(index: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            message: message.into(),
        }
    }
}
