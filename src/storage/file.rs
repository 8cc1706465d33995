//! File-backed dataset source (JSON or YAML)

use super::records::RecordSet;
use super::traits::{OpenSource, RecordSource, StorageError, StorageResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serialization format of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> StorageResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => Err(StorageError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// A dataset stored as a single file with `scientists`, `papers` and
/// `authors` sections
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: Format,
}

impl FileSource {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

impl OpenSource for FileSource {
    fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let format = Format::from_path(&path)?;
        Ok(Self { path, format })
    }
}

impl RecordSource for FileSource {
    fn load(&self) -> StorageResult<RecordSet> {
        let content = fs::read_to_string(&self.path)?;
        let records: RecordSet = match self.format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Yaml => serde_yaml::from_str(&content)?,
        };
        debug!(
            path = %self.path.display(),
            scientists = records.scientists.len(),
            papers = records.papers.len(),
            authors = records.authors.len(),
            "dataset read"
        );
        Ok(records)
    }
}
