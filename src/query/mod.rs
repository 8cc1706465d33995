//! Query system for co-authorship graphs
//!
//! Provides name resolution and shortest-path search over a loaded
//! `GraphStore`. Queries only read the store.

mod normalize;
mod path;
mod resolve;
mod types;

pub use normalize::normalize_name;
pub use path::PathQuery;
pub use resolve::{choose_candidate, NameQuery};
pub use types::{Candidate, PathResult, PathStep, Resolution};
