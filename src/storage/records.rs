//! Record types for the three dataset streams
//!
//! Field names follow the column names of the reference dataset
//! (`scientist_id`, `paper_id`, ...), so a file exported from the original
//! tables deserializes without renaming.

use super::traits::{RecordSource, StorageResult};
use serde::{Deserialize, Deserializer, Serialize};

/// One researcher row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub scientist_id: String,
    pub name: String,
}

impl PersonRecord {
    pub fn new(scientist_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            scientist_id: scientist_id.into(),
            name: name.into(),
        }
    }
}

/// One paper row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub paper_id: String,
    pub title: String,
    /// Accepts `"1999"` or `1999`; kept as an opaque label
    #[serde(default, deserialize_with = "year_label")]
    pub year: String,
}

impl PaperRecord {
    pub fn new(
        paper_id: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            paper_id: paper_id.into(),
            title: title.into(),
            year: year.into(),
        }
    }
}

/// One authorship link row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorshipRecord {
    pub scientist_id: String,
    pub paper_id: String,
}

impl AuthorshipRecord {
    pub fn new(scientist_id: impl Into<String>, paper_id: impl Into<String>) -> Self {
        Self {
            scientist_id: scientist_id.into(),
            paper_id: paper_id.into(),
        }
    }
}

/// The full contents of a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(default)]
    pub scientists: Vec<PersonRecord>,
    #[serde(default)]
    pub papers: Vec<PaperRecord>,
    #[serde(default)]
    pub authors: Vec<AuthorshipRecord>,
}

impl RecordSource for RecordSet {
    fn load(&self) -> StorageResult<RecordSet> {
        Ok(self.clone())
    }
}

fn year_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    Ok(match Year::deserialize(deserializer)? {
        Year::Text(s) => s,
        Year::Number(n) => n.to_string(),
    })
}
