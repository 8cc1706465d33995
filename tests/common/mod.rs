//! Shared fixtures for integration tests
//!
//! Datasets are built as `RecordSet`s and, where a test needs the file
//! path, written to a temporary directory.

pub mod dataset;
pub mod metrics;

pub use dataset::{chain_dataset, random_dataset, scenario_dataset, write_json, write_yaml};
pub use metrics::hop_distance;
