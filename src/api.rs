//! Transport-independent query API.
//!
//! `DegreesApi` is the single entry point for consumers (the CLI, tests, or
//! an embedding service). It wraps one loaded, immutable `GraphStore`;
//! cloning the API shares the store.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::graph::{GraphError, GraphResult, GraphStore, PaperId, PersonId};
use crate::query::{choose_candidate, Candidate, NameQuery, PathQuery, PathResult, Resolution};
use crate::storage::RecordSource;

/// Picks one person when a name matches several.
///
/// Implemented by the presentation layer, typically by asking a human.
pub trait Disambiguator {
    /// Return the chosen candidate id, or `None` to give up
    fn choose(&self, name: &str, candidates: &[Candidate]) -> Option<String>;
}

/// Never chooses; ambiguous names surface as errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDisambiguation;

impl Disambiguator for NoDisambiguation {
    fn choose(&self, _name: &str, _candidates: &[Candidate]) -> Option<String> {
        None
    }
}

/// One co-authorship hop with display text resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub paper_id: PaperId,
    pub paper_title: String,
    pub from_id: PersonId,
    pub from_name: String,
    pub to_id: PersonId,
    pub to_name: String,
}

/// A resolved chain between two people, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Separation {
    pub source: PersonId,
    pub target: PersonId,
    pub degrees: usize,
    pub connections: Vec<Connection>,
}

impl fmt::Display for Separation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} degrees of separation.", self.degrees)?;
        for (i, c) in self.connections.iter().enumerate() {
            write!(
                f,
                "\n{}: {} and {} co-authored \"{}\"",
                i + 1,
                c.from_name,
                c.to_name,
                c.paper_title
            )?;
        }
        Ok(())
    }
}

/// Single entry point for all consumer-facing operations.
#[derive(Debug, Clone)]
pub struct DegreesApi {
    store: Arc<GraphStore>,
}

impl DegreesApi {
    /// Create a new API instance over an already built store.
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }

    /// Build a store from a record source and wrap it.
    pub fn load(source: &impl RecordSource) -> GraphResult<Self> {
        Ok(Self::new(Arc::new(GraphStore::from_source(source)?)))
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    // --- Names ---

    /// Resolve a free-text name without making any choice.
    pub fn resolve_name(&self, name: &str) -> Resolution {
        NameQuery::new(name).execute(&self.store)
    }

    /// Accept an externally chosen id for an ambiguous name.
    pub fn resolve_ambiguous(
        &self,
        candidates: &[Candidate],
        chosen: &str,
    ) -> GraphResult<PersonId> {
        choose_candidate(candidates, chosen)
    }

    /// Resolve a name to one person, consulting `chooser` on ambiguity.
    pub fn resolve_with(&self, name: &str, chooser: &impl Disambiguator) -> GraphResult<PersonId> {
        match self.resolve_name(name) {
            Resolution::NotFound => Err(GraphError::NameNotFound(name.trim().to_string())),
            Resolution::Unique(id) => Ok(id),
            Resolution::Ambiguous(candidates) => match chooser.choose(name, &candidates) {
                Some(chosen) => self.resolve_ambiguous(&candidates, &chosen),
                None => Err(GraphError::AmbiguousName {
                    name: name.trim().to_string(),
                    candidates,
                }),
            },
        }
    }

    // --- Paths ---

    /// Shortest chain between two people, or `None` if they are not connected.
    pub fn shortest_path(
        &self,
        source: &PersonId,
        target: &PersonId,
    ) -> GraphResult<Option<Separation>> {
        self.find_path(&PathQuery::between(source.clone(), target.clone()))
    }

    /// Run an explicit path query and resolve its steps for display.
    pub fn find_path(&self, query: &PathQuery) -> GraphResult<Option<Separation>> {
        let result = query.execute(&self.store)?;
        if !result.found {
            return Ok(None);
        }
        self.describe(&query.source, &query.target, &result).map(Some)
    }

    fn describe(
        &self,
        source: &PersonId,
        target: &PersonId,
        result: &PathResult,
    ) -> GraphResult<Separation> {
        let mut connections = Vec::with_capacity(result.steps.len());
        let mut current = source;

        for step in &result.steps {
            let paper = self
                .store
                .paper(&step.paper)
                .ok_or_else(|| GraphError::UnknownPaper(step.paper.clone()))?;
            connections.push(Connection {
                paper_id: paper.id.clone(),
                paper_title: paper.title.clone(),
                from_id: current.clone(),
                from_name: self.name_of(current)?,
                to_id: step.person.clone(),
                to_name: self.name_of(&step.person)?,
            });
            current = &step.person;
        }

        Ok(Separation {
            source: source.clone(),
            target: target.clone(),
            degrees: connections.len(),
            connections,
        })
    }

    fn name_of(&self, id: &PersonId) -> GraphResult<String> {
        self.store
            .person(id)
            .map(|p| p.name.clone())
            .ok_or_else(|| GraphError::UnknownPerson(id.clone()))
    }
}
