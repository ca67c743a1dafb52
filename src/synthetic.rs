//! Synthetic graph and tree datasets, independent of any game rules

pub mod generator;
pub mod spec;

pub use generator::{SyntheticGraph, SyntheticPayload, SyntheticTree, generate, generate_tree};
pub use spec::{Limits, SyntheticMode, SyntheticSpec};
