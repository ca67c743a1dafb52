//! Adapters implementing domain ports.

pub mod file_store;
pub mod in_memory_store;

pub use file_store::FileStore;
pub use in_memory_store::InMemoryStore;
