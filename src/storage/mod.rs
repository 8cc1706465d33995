//! Dataset ingestion for the co-authorship graph
//!
//! Sources implement `RecordSource` and hand over plain records; the graph
//! never touches files directly. `FileSource` reads JSON or YAML datasets.

mod file;
mod records;
mod traits;

pub use file::{FileSource, Format};
pub use records::{AuthorshipRecord, PaperRecord, PersonRecord, RecordSet};
pub use traits::{OpenSource, RecordSource, StorageError, StorageResult};
