//! Degrees of separation over a co-authorship graph
//!
//! Researchers and papers form a bipartite graph: people connect to the
//! papers they wrote, and two people are one hop apart when they share a
//! paper. This crate loads such a dataset into memory, resolves typed-in
//! names to people, and finds the shortest co-authorship chain between two
//! of them.
//!
//! # Example
//!
//! ```
//! use coauthor_degrees::{AuthorshipRecord, DegreesApi, PaperRecord, PersonRecord, RecordSet};
//!
//! let records = RecordSet {
//!     scientists: vec![PersonRecord::new("1", "Alice"), PersonRecord::new("2", "Bob")],
//!     papers: vec![PaperRecord::new("10", "Paper X", "1999")],
//!     authors: vec![AuthorshipRecord::new("1", "10"), AuthorshipRecord::new("2", "10")],
//! };
//! let api = DegreesApi::load(&records).unwrap();
//! let path = api.shortest_path(&"1".into(), &"2".into()).unwrap().unwrap();
//! assert_eq!(path.degrees, 1);
//! ```

pub mod api;
mod graph;
pub mod query;
pub mod storage;

pub use api::{Connection, DegreesApi, Disambiguator, NoDisambiguation, Separation};
pub use graph::{
    GraphError, GraphResult, GraphStore, Neighbor, Paper, PaperId, Person, PersonId,
};
pub use query::{Candidate, NameQuery, PathQuery, PathResult, PathStep, Resolution};
pub use storage::{
    AuthorshipRecord, FileSource, OpenSource, PaperRecord, PersonRecord, RecordSet,
    RecordSource, StorageError, StorageResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
