//! Storage trait definitions

use super::records::RecordSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading a dataset
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Anything that can hand over the three record streams of a dataset
///
/// The graph core only sees records; where they come from (a file, a
/// database, a test fixture) stays behind this trait.
pub trait RecordSource {
    /// Read every person, paper and authorship record
    fn load(&self) -> StorageResult<RecordSet>;
}

/// Extension trait for sources backed by a path
pub trait OpenSource: RecordSource + Sized {
    /// Open the dataset at the given path
    fn open(path: impl AsRef<Path>) -> StorageResult<Self>;
}
