//! Tree projection: a single-root view over a graph with converging edges.
//!
//! The graph is walked breadth-first from its root, following each node's
//! outgoing edges in edge order. The edge that first reaches a node becomes
//! its parent link; every other edge into that node is kept as a
//! cross-reference, so the tree still carries the full edge set.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::model::{Edge, Graph, Node, NodeKey};
use crate::{Result, error::Error};

/// The tree edge that first reached a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParentLink<K, M> {
    pub node: K,
    pub tag: M,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode<K, P, M> {
    pub id: K,
    pub payload: P,
    /// `None` only for the root.
    pub parent: Option<ParentLink<K, M>>,
    pub depth: usize,
    pub children: Vec<K>,
}

/// A graph seen as a tree. Nodes are stored in traversal order, root first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree<K, P, M> {
    pub root: K,
    pub nodes: Vec<TreeNode<K, P, M>>,
    pub cross_refs: Vec<Edge<K, M>>,
}

impl<K: NodeKey, P: Clone, M: Clone> Tree<K, P, M> {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn cross_ref_count(&self) -> usize {
        self.cross_refs.len()
    }

    /// Number of parent links, `node_count - 1` for a non-empty tree.
    pub fn tree_edge_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.parent.is_some()).count()
    }

    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    pub fn get(&self, id: &K) -> Option<&TreeNode<K, P, M>> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Rebuild the graph the tree was projected from: every parent link
    /// becomes an edge again, followed by the cross-references.
    pub fn to_graph(&self) -> Graph<K, P, M> {
        let mut graph = Graph::new(self.root.clone());
        graph.nodes = self
            .nodes
            .iter()
            .map(|n| Node {
                id: n.id.clone(),
                payload: n.payload.clone(),
            })
            .collect();
        graph.edges = self
            .nodes
            .iter()
            .filter_map(|n| {
                n.parent.as_ref().map(|link| Edge {
                    from: link.node.clone(),
                    to: n.id.clone(),
                    tag: link.tag.clone(),
                })
            })
            .chain(self.cross_refs.iter().cloned())
            .collect();
        graph
    }
}

/// Project `graph` onto a tree rooted at `graph.root`.
///
/// # Errors
///
/// Returns [`Error::InvalidGraph`] if node ids are duplicated, an edge names
/// an unknown node, the root is missing, or some node cannot be reached from
/// the root (it would have no parent and the result would not be a tree).
pub fn project<K, P, M>(graph: &Graph<K, P, M>) -> Result<Tree<K, P, M>>
where
    K: NodeKey,
    P: Clone,
    M: Clone,
{
    let indexed = graph.indexed()?;
    let n = graph.node_count();

    // position of each graph node in `nodes`, once discovered
    let mut slot: Vec<Option<usize>> = vec![None; n];
    let mut is_tree_edge = vec![false; graph.edge_count()];
    let mut nodes: Vec<TreeNode<K, P, M>> = Vec::with_capacity(n);
    let mut queue = VecDeque::new();

    let root = &graph.nodes[indexed.root];
    slot[indexed.root] = Some(0);
    nodes.push(TreeNode {
        id: root.id.clone(),
        payload: root.payload.clone(),
        parent: None,
        depth: 0,
        children: Vec::new(),
    });
    queue.push_back((indexed.root, 0usize));

    while let Some((u, u_slot)) = queue.pop_front() {
        for &e in &indexed.outgoing[u] {
            let (_, v) = indexed.endpoints[e];
            if slot[v].is_some() {
                continue;
            }

            let edge = &graph.edges[e];
            let v_slot = nodes.len();
            slot[v] = Some(v_slot);
            is_tree_edge[e] = true;

            let depth = nodes[u_slot].depth + 1;
            nodes[u_slot].children.push(edge.to.clone());
            nodes.push(TreeNode {
                id: edge.to.clone(),
                payload: graph.nodes[v].payload.clone(),
                parent: Some(ParentLink {
                    node: edge.from.clone(),
                    tag: edge.tag.clone(),
                }),
                depth,
                children: Vec::new(),
            });
            queue.push_back((v, v_slot));
        }
    }

    if nodes.len() != n {
        return Err(Error::InvalidGraph {
            message: format!(
                "{} of {n} nodes are unreachable from root {:?}",
                n - nodes.len(),
                graph.root
            ),
        });
    }

    let cross_refs: Vec<Edge<K, M>> = graph
        .edges
        .iter()
        .zip(&is_tree_edge)
        .filter(|&(_, &tree_edge)| !tree_edge)
        .map(|(edge, _)| edge.clone())
        .collect();

    log::debug!(
        "projected {} nodes: {} tree edges, {} cross-references",
        nodes.len(),
        nodes.len().saturating_sub(1),
        cross_refs.len()
    );

    Ok(Tree {
        root: graph.root.clone(),
        nodes,
        cross_refs,
    })
}
