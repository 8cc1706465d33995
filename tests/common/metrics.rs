//! Reference distance computation, independent of `PathQuery`

use coauthor_degrees::{GraphStore, PersonId};
use std::collections::HashSet;

/// Hop distance by expanding whole levels through the paper/author sets.
///
/// Walks `Person::papers` and `Paper::authors` directly rather than
/// `neighbors_of`, so it cross-checks the search instead of repeating it.
pub fn hop_distance(store: &GraphStore, source: &PersonId, target: &PersonId) -> Option<usize> {
    let mut seen: HashSet<PersonId> = HashSet::from([source.clone()]);
    let mut level: HashSet<PersonId> = HashSet::from([source.clone()]);
    let mut depth = 0;

    while !level.is_empty() {
        if level.contains(target) {
            return Some(depth);
        }
        let mut next = HashSet::new();
        for id in &level {
            let person = store.person(id)?;
            for paper_id in &person.papers {
                for author in &store.paper(paper_id)?.authors {
                    if seen.insert(author.clone()) {
                        next.insert(author.clone());
                    }
                }
            }
        }
        level = next;
        depth += 1;
    }
    None
}
