//! Storage Adapters
//!
//! Implementations of the AnalysisResultStore port.
//!
//! ## Available Adapters
//!
//! - **FileResultStore** - Stores records as YAML files on disk
//! - **InMemoryResultStore** - Stores records in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileResultStore, InMemoryResultStore};
//!
//! // Production: file-based storage
//! let store = FileResultStore::new("./data/results");
//!
//! // Testing: in-memory storage
//! let store = InMemoryResultStore::new();
//! ```

mod file_result_store;
mod in_memory_result_store;

pub use file_result_store::FileResultStore;
pub use in_memory_result_store::InMemoryResultStore;
