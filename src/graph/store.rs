//! GraphStore: the in-memory bipartite person/paper graph for one dataset

use super::error::{GraphError, GraphResult};
use super::paper::{Paper, PaperId};
use super::person::{Person, PersonId};
use crate::query::normalize_name;
use crate::storage::{AuthorshipRecord, PaperRecord, PersonRecord, RecordSource};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// A co-author reached through one shared paper
///
/// Ordering is by paper id, then co-author id. Path search expands
/// neighbors in this order, which fixes the tie-break between
/// equal-length paths.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Neighbor {
    pub paper: PaperId,
    pub person: PersonId,
}

/// Loaded co-authorship graph
///
/// Built once by [`GraphStore::build`] and read-only afterwards, so a
/// single store can be shared across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    people: BTreeMap<PersonId, Person>,
    papers: BTreeMap<PaperId, Paper>,
    /// Normalized name -> people carrying that name
    names: BTreeMap<String, BTreeSet<PersonId>>,
    authorships: usize,
    dropped_links: usize,
}

impl GraphStore {
    /// Build a store from the three record streams.
    ///
    /// People and papers are inserted first; authorship links are applied
    /// last and silently skipped when either endpoint is missing. A repeated
    /// person or paper id fails the whole build.
    pub fn build<P, W, L>(people: P, papers: W, links: L) -> GraphResult<Self>
    where
        P: IntoIterator<Item = PersonRecord>,
        W: IntoIterator<Item = PaperRecord>,
        L: IntoIterator<Item = AuthorshipRecord>,
    {
        let mut store = Self::default();

        for record in people {
            store.insert_person(record)?;
        }
        for record in papers {
            store.insert_paper(record)?;
        }
        for link in links {
            store.link(link);
        }

        info!(
            people = store.people.len(),
            papers = store.papers.len(),
            authorships = store.authorships,
            dropped_links = store.dropped_links,
            "graph built"
        );
        Ok(store)
    }

    /// Load all records from a source and build the store
    pub fn from_source(source: &impl RecordSource) -> GraphResult<Self> {
        let records = source.load()?;
        Self::build(records.scientists, records.papers, records.authors)
    }

    fn insert_person(&mut self, record: PersonRecord) -> GraphResult<()> {
        let id = PersonId::from(record.scientist_id);
        if self.people.contains_key(&id) {
            return Err(GraphError::DuplicatePerson(id));
        }
        self.names
            .entry(normalize_name(&record.name))
            .or_default()
            .insert(id.clone());
        self.people.insert(id.clone(), Person::new(id, record.name));
        Ok(())
    }

    fn insert_paper(&mut self, record: PaperRecord) -> GraphResult<()> {
        let id = PaperId::from(record.paper_id);
        if self.papers.contains_key(&id) {
            return Err(GraphError::DuplicatePaper(id));
        }
        self.papers
            .insert(id.clone(), Paper::new(id, record.title, record.year));
        Ok(())
    }

    fn link(&mut self, link: AuthorshipRecord) {
        let person_id = PersonId::from(link.scientist_id);
        let paper_id = PaperId::from(link.paper_id);

        let (Some(person), Some(paper)) = (
            self.people.get_mut(&person_id),
            self.papers.get_mut(&paper_id),
        ) else {
            debug!(person = %person_id, paper = %paper_id, "dropping dangling authorship link");
            self.dropped_links += 1;
            return;
        };

        let added = person.papers.insert(paper_id);
        paper.authors.insert(person_id);
        if added {
            self.authorships += 1;
        }
    }

    /// Every (paper, co-author) pair reachable in one hop from `id`.
    ///
    /// Two people who share several papers appear once per paper.
    pub fn neighbors_of(&self, id: &PersonId) -> GraphResult<BTreeSet<Neighbor>> {
        let person = self
            .people
            .get(id)
            .ok_or_else(|| GraphError::UnknownPerson(id.clone()))?;

        let mut neighbors = BTreeSet::new();
        for paper_id in &person.papers {
            let Some(paper) = self.papers.get(paper_id) else {
                continue;
            };
            for author in paper.authors.iter().filter(|a| *a != id) {
                neighbors.insert(Neighbor {
                    paper: paper_id.clone(),
                    person: author.clone(),
                });
            }
        }
        Ok(neighbors)
    }

    /// People whose name normalizes to the same key as `name`
    pub fn ids_for_name(&self, name: &str) -> Option<&BTreeSet<PersonId>> {
        self.names.get(&normalize_name(name))
    }

    /// Get a person by ID
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    /// Get a paper by ID
    pub fn paper(&self, id: &PaperId) -> Option<&Paper> {
        self.papers.get(id)
    }

    /// Check if a person exists
    pub fn has_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    /// All people, ordered by id
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// All papers, ordered by id
    pub fn papers(&self) -> impl Iterator<Item = &Paper> {
        self.papers.values()
    }

    /// Name index buckets, keyed by normalized name
    pub fn name_index(&self) -> impl Iterator<Item = (&str, &BTreeSet<PersonId>)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn paper_count(&self) -> usize {
        self.papers.len()
    }

    /// Number of distinct person-paper links applied
    pub fn authorship_count(&self) -> usize {
        self.authorships
    }

    /// Number of links skipped because an endpoint was missing
    pub fn dropped_links(&self) -> usize {
        self.dropped_links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str, name: &str) -> PersonRecord {
        PersonRecord::new(id, name)
    }

    fn paper(id: &str, title: &str) -> PaperRecord {
        PaperRecord::new(id, title, "2020")
    }

    fn link(person: &str, paper: &str) -> AuthorshipRecord {
        AuthorshipRecord::new(person, paper)
    }

    #[test]
    fn test_build_links_both_directions() {
        let store = GraphStore::build(
            vec![person("1", "Alice"), person("2", "Bob")],
            vec![paper("10", "Paper X")],
            vec![link("1", "10"), link("2", "10")],
        )
        .unwrap();

        assert_eq!(store.person_count(), 2);
        assert_eq!(store.paper_count(), 1);
        assert_eq!(store.authorship_count(), 2);

        let alice = store.person(&PersonId::from("1")).unwrap();
        assert!(alice.papers.contains(&PaperId::from("10")));
        let paper_x = store.paper(&PaperId::from("10")).unwrap();
        assert_eq!(paper_x.authors.len(), 2);
    }

    #[test]
    fn test_dangling_links_are_dropped() {
        let store = GraphStore::build(
            vec![person("1", "Alice")],
            vec![paper("10", "Paper X")],
            vec![link("1", "99"), link("42", "10"), link("1", "10")],
        )
        .unwrap();

        assert_eq!(store.dropped_links(), 2);
        assert_eq!(store.authorship_count(), 1);
        let alice = store.person(&PersonId::from("1")).unwrap();
        assert_eq!(alice.papers.len(), 1);
        assert!(store.paper(&PaperId::from("99")).is_none());
    }

    #[test]
    fn test_repeated_link_counts_once() {
        let store = GraphStore::build(
            vec![person("1", "Alice")],
            vec![paper("10", "Paper X")],
            vec![link("1", "10"), link("1", "10")],
        )
        .unwrap();

        assert_eq!(store.authorship_count(), 1);
    }

    #[test]
    fn test_duplicate_person_rejected() {
        let result = GraphStore::build(
            vec![person("1", "Alice"), person("1", "Alicia")],
            Vec::new(),
            Vec::new(),
        );
        assert!(matches!(result, Err(GraphError::DuplicatePerson(id)) if id.as_str() == "1"));
    }

    #[test]
    fn test_duplicate_paper_rejected() {
        let result = GraphStore::build(
            Vec::new(),
            vec![paper("10", "A"), paper("10", "B")],
            Vec::new(),
        );
        assert!(matches!(result, Err(GraphError::DuplicatePaper(_))));
    }

    #[test]
    fn test_neighbors_keep_parallel_papers() {
        let store = GraphStore::build(
            vec![person("1", "Alice"), person("2", "Bob"), person("3", "Carol")],
            vec![paper("10", "X"), paper("11", "Y")],
            vec![
                link("1", "10"),
                link("2", "10"),
                link("1", "11"),
                link("2", "11"),
                link("3", "11"),
            ],
        )
        .unwrap();

        let neighbors: Vec<_> = store
            .neighbors_of(&PersonId::from("1"))
            .unwrap()
            .into_iter()
            .map(|n| (n.paper.to_string(), n.person.to_string()))
            .collect();

        assert_eq!(
            neighbors,
            vec![
                ("10".to_string(), "2".to_string()),
                ("11".to_string(), "2".to_string()),
                ("11".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_neighbors_of_unknown_person() {
        let store = GraphStore::default();
        let result = store.neighbors_of(&PersonId::from("nobody"));
        assert!(matches!(result, Err(GraphError::UnknownPerson(_))));
    }

    #[test]
    fn test_ids_for_name_normalizes() {
        let store = GraphStore::build(
            vec![person("1", "Pat Lee"), person("2", "  pat lee ")],
            Vec::new(),
            Vec::new(),
        )
        .unwrap();

        let ids = store.ids_for_name("PAT LEE").unwrap();
        assert_eq!(ids.len(), 2);
        assert!(store.ids_for_name("Pat").is_none());
    }
}
