//! Shortest co-authorship chain between two people

use super::types::{PathResult, PathStep};
use crate::graph::{GraphError, GraphResult, GraphStore, Neighbor, PaperId, PersonId};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Query for the shortest chain of co-authorship between two people
///
/// Breadth-first over people, with edges derived on demand through shared
/// papers. Neighbors are expanded in `(paper id, co-author id)` order, so
/// among several shortest chains the one found is the first in that order
/// at every hop.
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Source person ID
    pub source: PersonId,
    /// Target person ID
    pub target: PersonId,
    /// Maximum number of hops to search; unbounded when `None`
    pub max_degrees: Option<usize>,
}

impl PathQuery {
    /// Create a new path query between two people
    pub fn between(source: PersonId, target: PersonId) -> Self {
        Self {
            source,
            target,
            max_degrees: None,
        }
    }

    /// Give up on chains longer than `max_degrees` hops
    pub fn max_degrees(mut self, max_degrees: usize) -> Self {
        self.max_degrees = Some(max_degrees);
        self
    }

    /// Execute the path query.
    ///
    /// Fails if either endpoint is not in the store. Otherwise returns a
    /// found path (empty when source equals target) or `not_found`.
    pub fn execute(&self, store: &GraphStore) -> GraphResult<PathResult> {
        for id in [&self.source, &self.target] {
            if !store.has_person(id) {
                return Err(GraphError::UnknownPerson(id.clone()));
            }
        }

        if self.source == self.target {
            return Ok(PathResult::found(Vec::new()));
        }

        let mut visited: HashSet<PersonId> = HashSet::new();
        let mut queue: VecDeque<(PersonId, usize)> = VecDeque::new();
        let mut predecessors: HashMap<PersonId, (PersonId, PaperId)> = HashMap::new();

        visited.insert(self.source.clone());
        queue.push_back((self.source.clone(), 0));
        let mut expanded = 0usize;

        while let Some((current, depth)) = queue.pop_front() {
            // Depths in the queue never decrease.
            if self.max_degrees.is_some_and(|max| depth >= max) {
                break;
            }
            expanded += 1;

            for Neighbor { paper, person } in store.neighbors_of(&current)? {
                if !visited.insert(person.clone()) {
                    continue;
                }

                let reached = person == self.target;
                predecessors.insert(person.clone(), (current.clone(), paper));

                if reached {
                    let result = self.reconstruct_path(&predecessors);
                    debug!(
                        source = %self.source,
                        target = %self.target,
                        degrees = result.steps.len(),
                        expanded,
                        "path found"
                    );
                    return Ok(result);
                }

                queue.push_back((person, depth + 1));
            }
        }

        debug!(
            source = %self.source,
            target = %self.target,
            expanded,
            visited = visited.len(),
            "no path"
        );
        Ok(PathResult::not_found())
    }

    /// Reconstruct the path from predecessors map
    fn reconstruct_path(
        &self,
        predecessors: &HashMap<PersonId, (PersonId, PaperId)>,
    ) -> PathResult {
        let mut steps: Vec<PathStep> = Vec::new();

        // Walk backwards from target to source
        let mut current = &self.target;
        while let Some((pred, paper)) = predecessors.get(current) {
            steps.push(PathStep {
                paper: paper.clone(),
                person: current.clone(),
            });
            current = pred;
        }

        // Reverse to get source -> target order
        steps.reverse();
        PathResult::found(steps)
    }
}
