//! Person representation in the co-authorship graph

use super::paper::PaperId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Unique identifier for a person
///
/// Serializes as a plain string; the value is opaque and compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Create a PersonId from any string token
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A researcher in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,
    /// Name as it appeared in the source record (not unique)
    pub name: String,
    /// Papers this person authored
    pub papers: BTreeSet<PaperId>,
}

impl Person {
    /// Create a person with no papers yet
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            papers: BTreeSet::new(),
        }
    }
}
