//! Name resolution: free text to a person id

use super::types::{Candidate, Resolution};
use crate::graph::{GraphError, GraphResult, GraphStore, PersonId};

/// Query for resolving a human-entered name
///
/// Matching is exact on the normalized name (trimmed, lower-cased); there
/// is no partial or fuzzy matching. When several people share the name the
/// query reports all of them and leaves the choice to the caller.
#[derive(Debug, Clone)]
pub struct NameQuery {
    pub name: String,
}

impl NameQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Execute the query against a store
    pub fn execute(&self, store: &GraphStore) -> Resolution {
        let Some(ids) = store.ids_for_name(&self.name) else {
            return Resolution::NotFound;
        };

        let mut candidates: Vec<Candidate> = ids
            .iter()
            .filter_map(|id| {
                store.person(id).map(|p| Candidate {
                    id: p.id.clone(),
                    name: p.name.clone(),
                })
            })
            .collect();

        match candidates.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Unique(candidates.remove(0).id),
            _ => Resolution::Ambiguous(candidates),
        }
    }
}

/// Accept an externally chosen id if it is one of the candidates.
///
/// Surrounding whitespace in `chosen` is ignored.
pub fn choose_candidate(candidates: &[Candidate], chosen: &str) -> GraphResult<PersonId> {
    let chosen = chosen.trim();
    candidates
        .iter()
        .find(|c| c.id.as_str() == chosen)
        .map(|c| c.id.clone())
        .ok_or_else(|| GraphError::NotACandidate(chosen.to_string()))
}
