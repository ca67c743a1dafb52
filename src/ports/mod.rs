//! Ports (trait boundaries) for external dependencies.
//!
//! These traits are owned by the domain and implemented by adapters, so the
//! CLI and tests can swap storage without touching generation code.

pub mod store;

pub use store::DocumentStore;
