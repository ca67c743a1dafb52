//! Seeded generation of synthetic graphs and trees.
//!
//! Nodes are numbered `0..n` in placement order and node `0` is the root.
//! Every edge points from an earlier node to a later one, so the result is
//! acyclic and every node is reachable from the root.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::index};
use serde::{Deserialize, Serialize};

use super::spec::{SyntheticMode, SyntheticSpec};
use crate::{
    Result,
    graph::{Graph, Tree, project},
};

/// Generated data attached to each synthetic node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyntheticPayload {
    /// 0 or 1.
    pub owner: u8,
    /// Set for graph-mode nodes.
    pub priority: Option<u8>,
    /// Set for tree-mode leaves.
    pub value: Option<i64>,
}

pub type SyntheticGraph = Graph<u64, SyntheticPayload, ()>;
pub type SyntheticTree = Tree<u64, SyntheticPayload, ()>;

/// Nodes that can still take another outgoing edge, with O(1) removal.
struct OpenSet {
    items: Vec<u64>,
    slot: Vec<Option<usize>>,
}

impl OpenSet {
    fn with_capacity(n: usize) -> Self {
        Self {
            items: Vec::new(),
            slot: vec![None; n],
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn insert(&mut self, id: u64) {
        self.slot[id as usize] = Some(self.items.len());
        self.items.push(id);
    }

    fn remove(&mut self, id: u64) {
        let Some(pos) = self.slot[id as usize].take() else {
            return;
        };
        self.items.swap_remove(pos);
        if let Some(&moved) = self.items.get(pos) {
            self.slot[moved as usize] = Some(pos);
        }
    }
}

/// Generate a dataset of the shape `spec.mode` asks for.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidSpec`] if the spec fails validation.
pub fn generate(spec: &SyntheticSpec) -> Result<SyntheticGraph> {
    let limits = spec.validate()?;
    let n = limits.nodes;
    let cap = limits.max_degree;
    let mut rng = StdRng::seed_from_u64(spec.seed);

    let mut graph = SyntheticGraph::new(0);
    let mut out_degree = vec![0usize; n];
    let mut open = OpenSet::with_capacity(n);

    let mut link = |graph: &mut SyntheticGraph, open: &mut OpenSet, from: u64, to: u64| {
        graph.add_edge(from, to, ());
        out_degree[from as usize] += 1;
        if out_degree[from as usize] == cap {
            open.remove(from);
        }
    };

    graph.add_node(0, node_payload(spec, &mut rng));
    open.insert(0);

    for id in 1..n as u64 {
        let parent = open.items[rng.random_range(0..open.len())];
        link(&mut graph, &mut open, parent, id);

        if spec.mode == SyntheticMode::Graph {
            let extra = rng.random_range(0..cap).min(open.len());
            let sources: Vec<u64> = index::sample(&mut rng, open.len(), extra)
                .into_iter()
                .map(|i| open.items[i])
                .filter(|&source| source != parent)
                .collect();
            for source in sources {
                link(&mut graph, &mut open, source, id);
            }
        }

        graph.add_node(id, node_payload(spec, &mut rng));
        open.insert(id);
    }

    if spec.mode == SyntheticMode::Tree {
        let (min, max) = spec.leaf_range;
        for node in &mut graph.nodes {
            if out_degree[node.id as usize] == 0 {
                node.payload.value = Some(rng.random_range(min..=max));
            }
        }
    }

    log::debug!(
        "generated synthetic {:?} with {} nodes and {} edges (seed {})",
        spec.mode,
        graph.node_count(),
        graph.edge_count(),
        spec.seed
    );

    Ok(graph)
}

/// Generate a dataset and project it onto a tree rooted at node 0.
///
/// In tree mode there are no cross-references; in graph mode the extra
/// converging edges become cross-references.
pub fn generate_tree(spec: &SyntheticSpec) -> Result<SyntheticTree> {
    let graph = generate(spec)?;
    project(&graph)
}

fn node_payload(spec: &SyntheticSpec, rng: &mut StdRng) -> SyntheticPayload {
    let owner = rng.random_range(0..=1);
    let priority = match spec.mode {
        SyntheticMode::Graph => Some(rng.random_range(0..=spec.priority_max)),
        SyntheticMode::Tree => None,
    };
    SyntheticPayload {
        owner,
        priority,
        value: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_node_request_yields_lone_root() {
        let graph = generate(&SyntheticSpec::graph(1, 3)).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.root, 0);
    }

    #[test]
    fn tree_leaves_get_values_in_range() {
        let spec = SyntheticSpec::tree(200, 3)
            .with_seed(5)
            .with_leaf_range(-4, 4);
        let graph = generate(&spec).unwrap();
        let out = graph.out_degrees();
        for node in &graph.nodes {
            let leaf = out[&node.id] == 0;
            assert_eq!(node.payload.value.is_some(), leaf);
            if let Some(v) = node.payload.value {
                assert!((-4..=4).contains(&v));
            }
            assert!(node.payload.priority.is_none());
            assert!(node.payload.owner <= 1);
        }
    }

    #[test]
    fn out_degree_cap_is_respected() {
        let spec = SyntheticSpec::graph(500, 2).with_seed(11);
        let graph = generate(&spec).unwrap();
        assert!(graph.out_degrees().values().all(|&d| d <= 2));
        assert!(graph.edges.iter().all(|e| e.from < e.to));
    }

    #[test]
    fn open_set_keeps_slots_consistent() {
        let mut open = OpenSet::with_capacity(4);
        for id in 0..4 {
            open.insert(id);
        }
        open.remove(1);
        open.remove(1);
        open.remove(0);
        let mut remaining = open.items.clone();
        remaining.sort();
        assert_eq!(remaining, vec![2, 3]);
        assert_eq!(open.slot[3].map(|pos| open.items[pos]), Some(3));
    }
}
