//! Configuration for synthetic dataset generation.

use serde::{Deserialize, Serialize};

use crate::{Result, error::Error};

/// Which shape of dataset to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyntheticMode {
    /// Each node may receive edges from several earlier nodes; `max_degree`
    /// caps out-degree.
    Graph,
    /// Each node has exactly one parent; `max_degree` caps children per node.
    Tree,
}

/// Requested size, branching limits and seed for a synthetic dataset.
///
/// Identical specs always generate identical datasets.
///
/// # Examples
///
/// ```
/// use stategraph::synthetic::SyntheticSpec;
///
/// let spec = SyntheticSpec::tree(1_000, 4)
///     .with_seed(7)
///     .with_leaf_range(-10, 10);
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticSpec {
    pub mode: SyntheticMode,
    /// Signed so that nonsensical requests reach [`validate`](Self::validate).
    pub nodes: i64,
    pub max_degree: i64,
    pub seed: u64,
    /// Inclusive range for tree leaf values.
    pub leaf_range: (i64, i64),
    /// Inclusive upper bound for graph node priorities.
    pub priority_max: u8,
}

/// Size limits of a spec that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub nodes: usize,
    pub max_degree: usize,
}

impl SyntheticSpec {
    pub const DEFAULT_NODES: i64 = 120_000;
    pub const DEFAULT_MAX_DEGREE: i64 = 3;
    pub const DEFAULT_LEAF_RANGE: (i64, i64) = (-100, 100);
    pub const DEFAULT_PRIORITY_MAX: u8 = 15;

    fn new(mode: SyntheticMode, nodes: i64, max_degree: i64) -> Self {
        Self {
            mode,
            nodes,
            max_degree,
            seed: 0,
            leaf_range: Self::DEFAULT_LEAF_RANGE,
            priority_max: Self::DEFAULT_PRIORITY_MAX,
        }
    }

    /// A convergent acyclic graph of `nodes` nodes, out-degree at most `max_out_degree`.
    pub fn graph(nodes: i64, max_out_degree: i64) -> Self {
        Self::new(SyntheticMode::Graph, nodes, max_out_degree)
    }

    /// A rooted tree of `nodes` nodes, at most `max_children` children per node.
    pub fn tree(nodes: i64, max_children: i64) -> Self {
        Self::new(SyntheticMode::Tree, nodes, max_children)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_leaf_range(mut self, min: i64, max: i64) -> Self {
        self.leaf_range = (min, max);
        self
    }

    pub fn with_priority_max(mut self, priority_max: u8) -> Self {
        self.priority_max = priority_max;
        self
    }

    /// Check the request and convert its sizes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpec`] for a node count below 1, a degree cap
    /// below 1, or a leaf range whose minimum exceeds its maximum.
    pub fn validate(&self) -> Result<Limits> {
        if self.nodes < 1 {
            return Err(Error::invalid_spec(format!(
                "node count must be at least 1, got {}",
                self.nodes
            )));
        }
        if self.max_degree < 1 {
            return Err(Error::invalid_spec(format!(
                "degree cap must be at least 1, got {}",
                self.max_degree
            )));
        }
        let (min, max) = self.leaf_range;
        if min > max {
            return Err(Error::invalid_spec(format!(
                "leaf range {min}..={max} is empty"
            )));
        }

        let nodes = usize::try_from(self.nodes)
            .map_err(|_| Error::invalid_spec(format!("node count {} is too large", self.nodes)))?;
        let max_degree = usize::try_from(self.max_degree).map_err(|_| {
            Error::invalid_spec(format!("degree cap {} is too large", self.max_degree))
        })?;

        Ok(Limits { nodes, max_degree })
    }
}

impl Default for SyntheticSpec {
    fn default() -> Self {
        Self::graph(Self::DEFAULT_NODES, Self::DEFAULT_MAX_DEGREE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_sizes() {
        for spec in [
            SyntheticSpec::graph(0, 3),
            SyntheticSpec::graph(-5, 3),
            SyntheticSpec::graph(10, 0),
            SyntheticSpec::tree(10, -1),
        ] {
            assert!(
                matches!(spec.validate(), Err(Error::InvalidSpec { .. })),
                "{spec:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_inverted_leaf_range() {
        let spec = SyntheticSpec::tree(10, 2).with_leaf_range(5, -5);
        assert!(spec.validate().is_err());
    }

    #[test]
    fn builder_sets_fields() {
        let spec = SyntheticSpec::graph(50, 2).with_seed(9).with_priority_max(3);
        assert_eq!(spec.mode, SyntheticMode::Graph);
        assert_eq!(spec.seed, 9);
        assert_eq!(spec.priority_max, 3);
        assert_eq!(
            spec.validate().unwrap(),
            Limits {
                nodes: 50,
                max_degree: 2
            }
        );
    }
}
