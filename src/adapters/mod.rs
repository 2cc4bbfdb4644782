//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `dataset` - Sources of alternatives and criterion values (file, in-memory)
//! - `storage` - Result stores (YAML files, in-memory)

pub mod dataset;
pub mod storage;

pub use dataset::{InMemoryDataSource, JsonFileDataSource};
pub use storage::{FileResultStore, InMemoryResultStore};
