//! Errors raised while building or querying a co-authorship graph

use super::paper::PaperId;
use super::person::PersonId;
use crate::query::Candidate;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can occur in graph operations
#[derive(Debug, Error)]
pub enum GraphError {
    /// An id handed to a query is not in the store
    #[error("Person not found: {0}")]
    UnknownPerson(PersonId),

    #[error("Paper not found: {0}")]
    UnknownPaper(PaperId),

    #[error("No scientist named '{0}'")]
    NameNotFound(String),

    /// More than one person carries the name and no choice was made
    #[error("Name '{name}' matches {} people", .candidates.len())]
    AmbiguousName {
        name: String,
        candidates: Vec<Candidate>,
    },

    #[error("'{0}' is not one of the candidates")]
    NotACandidate(String),

    #[error("Duplicate person id: {0}")]
    DuplicatePerson(PersonId),

    #[error("Duplicate paper id: {0}")]
    DuplicatePaper(PaperId),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
