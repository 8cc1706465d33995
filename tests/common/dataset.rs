//! Dataset fixtures

use coauthor_degrees::{AuthorshipRecord, PaperRecord, PersonRecord, RecordSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// Alice, Bob, Carol and two people called "Pat Lee".
///
/// Alice and Bob share "Paper X", Bob and Carol share "Paper Y"; the Pat
/// Lees and Dana (a paper with no co-authors) are unconnected.
pub fn scenario_dataset() -> RecordSet {
    RecordSet {
        scientists: vec![
            PersonRecord::new("1", "Alice"),
            PersonRecord::new("2", "Bob"),
            PersonRecord::new("3", "Carol"),
            PersonRecord::new("4", "Pat Lee"),
            PersonRecord::new("5", "pat lee"),
            PersonRecord::new("6", "Dana"),
        ],
        papers: vec![
            PaperRecord::new("10", "Paper X", "1971"),
            PaperRecord::new("11", "Paper Y", "1975"),
            PaperRecord::new("12", "Alone Together", "1980"),
        ],
        authors: vec![
            AuthorshipRecord::new("1", "10"),
            AuthorshipRecord::new("2", "10"),
            AuthorshipRecord::new("2", "11"),
            AuthorshipRecord::new("3", "11"),
            AuthorshipRecord::new("6", "12"),
            AuthorshipRecord::new("4", "404"),
            AuthorshipRecord::new("404", "10"),
        ],
    }
}

/// `len` people in a line, each consecutive pair sharing one paper
pub fn chain_dataset(len: usize) -> RecordSet {
    let scientists = (0..len)
        .map(|i| PersonRecord::new(format!("p{i}"), format!("Person {i}")))
        .collect();
    let papers = (1..len)
        .map(|i| PaperRecord::new(format!("w{i}"), format!("Work {i}"), "2000"))
        .collect();
    let authors = (1..len)
        .flat_map(|i| {
            [
                AuthorshipRecord::new(format!("p{}", i - 1), format!("w{i}")),
                AuthorshipRecord::new(format!("p{i}"), format!("w{i}")),
            ]
        })
        .collect();
    RecordSet { scientists, papers, authors }
}

/// Seeded random bipartite dataset; each paper gets 1..=max_authors authors
pub fn random_dataset(seed: u64, people: usize, papers: usize, max_authors: usize) -> RecordSet {
    let mut rng = StdRng::seed_from_u64(seed);

    let scientists = (0..people)
        .map(|i| PersonRecord::new(format!("s{i}"), format!("Scientist {}", i % 7)))
        .collect();
    let paper_records = (0..papers)
        .map(|i| PaperRecord::new(format!("w{i}"), format!("Work {i}"), "1990"))
        .collect();

    let mut authors = Vec::new();
    for w in 0..papers {
        let count = rng.gen_range(1..=max_authors);
        for _ in 0..count {
            let s = rng.gen_range(0..people);
            authors.push(AuthorshipRecord::new(format!("s{s}"), format!("w{w}")));
        }
    }

    RecordSet {
        scientists,
        papers: paper_records,
        authors,
    }
}

/// Write a dataset as JSON into `dir`
pub fn write_json(dir: &Path, records: &RecordSet) -> PathBuf {
    let path = dir.join("dataset.json");
    std::fs::write(&path, serde_json::to_string_pretty(records).unwrap()).unwrap();
    path
}

/// Write a dataset as YAML into `dir`
pub fn write_yaml(dir: &Path, records: &RecordSet) -> PathBuf {
    let path = dir.join("dataset.yaml");
    std::fs::write(&path, serde_yaml::to_string(records).unwrap()).unwrap();
    path
}
