//! Core graph data structures

mod error;
mod paper;
mod person;
mod store;


pub use error::{GraphError, GraphResult};
pub use paper::{Paper, PaperId};
pub use person::{Person, PersonId};
pub use store::{GraphStore, Neighbor};
