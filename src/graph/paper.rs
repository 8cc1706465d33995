//! Paper representation: the connecting node between co-authors

use super::person::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Unique identifier for a paper
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaperId(String);

impl PaperId {
    /// Create a PaperId from any string token
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaperId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PaperId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PaperId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A paper and the people who wrote it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Unique identifier
    pub id: PaperId,
    /// Title
    pub title: String,
    /// Publication year label; carried through, never interpreted
    pub year: String,
    /// Authors of this paper
    pub authors: BTreeSet<PersonId>,
}

impl Paper {
    /// Create a paper with no authors yet
    pub fn new(id: impl Into<PaperId>, title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            authors: BTreeSet::new(),
        }
    }
}
