//! Dataset Adapters
//!
//! Implementations of the AnalysisDataSource port.
//!
//! - **JsonFileDataSource** - Reads a JSON or YAML file
//! - **InMemoryDataSource** - Serves a dataset from memory (testing/development)

mod in_memory_source;
mod json_file_source;

pub use in_memory_source::InMemoryDataSource;
pub use json_file_source::JsonFileDataSource;
