//! Query types and result structures

use crate::graph::{PaperId, PersonId};
use serde::{Deserialize, Serialize};

/// A person offered as one interpretation of an ambiguous name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: PersonId,
    pub name: String,
}

/// Outcome of resolving a free-text name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No person carries the name
    NotFound,
    /// Exactly one person carries the name
    Unique(PersonId),
    /// Several people carry the name; candidates are ordered by id
    Ambiguous(Vec<Candidate>),
}

impl Resolution {
    /// The resolved id, if the name was unique
    pub fn unique(&self) -> Option<&PersonId> {
        match self {
            Resolution::Unique(id) => Some(id),
            _ => None,
        }
    }
}

/// One hop of a path: `person` is reached through `paper`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep {
    pub paper: PaperId,
    pub person: PersonId,
}

/// Result of a path query
#[derive(Debug, Clone)]
pub struct PathResult {
    /// Whether a path was found
    pub found: bool,
    /// Steps from source to target; the source itself is not included
    pub steps: Vec<PathStep>,
}

impl PathResult {
    pub fn not_found() -> Self {
        Self {
            found: false,
            steps: Vec::new(),
        }
    }

    pub fn found(steps: Vec<PathStep>) -> Self {
        Self { found: true, steps }
    }

    /// Degrees of separation (number of hops), if connected
    pub fn degrees(&self) -> Option<usize> {
        self.found.then_some(self.steps.len())
    }

    /// Person ids along the path, source excluded
    pub fn people(&self) -> impl Iterator<Item = &PersonId> {
        self.steps.iter().map(|s| &s.person)
    }
}
