//! Node/edge data model shared by the state enumerator and the synthetic generator.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
};

use serde::{Deserialize, Serialize};

use crate::{Result, error::Error};

/// Bound satisfied by anything usable as a node identifier.
pub trait NodeKey: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> NodeKey for T {}

/// A vertex: a unique identifier plus its payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node<K, P> {
    pub id: K,
    pub payload: P,
}

/// A directed connection `from -> to`, tagged with whatever produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<K, M> {
    pub from: K,
    pub to: K,
    pub tag: M,
}

/// A directed graph with a designated start node.
///
/// Nodes and edges are kept in insertion order, which is the discovery order
/// of whatever built the graph. The tree projector relies on that order being
/// stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph<K, P, M> {
    pub root: K,
    pub nodes: Vec<Node<K, P>>,
    pub edges: Vec<Edge<K, M>>,
}

/// Index-based view of a [`Graph`] with every endpoint resolved.
pub(crate) struct IndexedGraph {
    pub root: usize,
    /// `(from, to)` node indices, one entry per edge in edge order.
    pub endpoints: Vec<(usize, usize)>,
    /// Outgoing edge indices per node, in edge order.
    pub outgoing: Vec<Vec<usize>>,
}

impl<K: NodeKey, P, M> Graph<K, P, M> {
    /// Create an empty graph whose start node will be `root`.
    ///
    /// The root node itself still has to be added with [`add_node`](Self::add_node).
    pub fn new(root: K) -> Self {
        Self {
            root,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_node(&mut self, id: K, payload: P) {
        self.nodes.push(Node { id, payload });
    }

    pub fn add_edge(&mut self, from: K, to: K, tag: M) {
        self.edges.push(Edge { from, to, tag });
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by id. Linear; build an index for repeated lookups.
    pub fn node(&self, id: &K) -> Option<&Node<K, P>> {
        self.nodes.iter().find(|node| &node.id == id)
    }

    /// Number of incoming edges for every node, zero included.
    pub fn in_degrees(&self) -> HashMap<&K, usize> {
        let mut degrees: HashMap<&K, usize> = self.nodes.iter().map(|n| (&n.id, 0)).collect();
        for edge in &self.edges {
            *degrees.entry(&edge.to).or_insert(0) += 1;
        }
        degrees
    }

    /// Number of outgoing edges for every node, zero included.
    pub fn out_degrees(&self) -> HashMap<&K, usize> {
        let mut degrees: HashMap<&K, usize> = self.nodes.iter().map(|n| (&n.id, 0)).collect();
        for edge in &self.edges {
            *degrees.entry(&edge.from).or_insert(0) += 1;
        }
        degrees
    }

    /// Outgoing edges per node, each list in edge order.
    pub fn successors(&self) -> HashMap<&K, Vec<&Edge<K, M>>> {
        let mut adjacency: HashMap<&K, Vec<&Edge<K, M>>> = HashMap::new();
        for edge in &self.edges {
            adjacency.entry(&edge.from).or_default().push(edge);
        }
        adjacency
    }

    /// Resolve node keys to indices, rejecting duplicate keys, a missing root
    /// and edges whose endpoints are not nodes of the graph.
    pub(crate) fn indexed(&self) -> Result<IndexedGraph> {
        let mut index: HashMap<&K, usize> = HashMap::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            if index.insert(&node.id, i).is_some() {
                return Err(Error::InvalidGraph {
                    message: format!("duplicate node id {:?}", node.id),
                });
            }
        }

        let root = *index.get(&self.root).ok_or_else(|| Error::InvalidGraph {
            message: format!("root {:?} is not a node of the graph", self.root),
        })?;

        let lookup = |key: &K| {
            index.get(key).copied().ok_or_else(|| Error::InvalidGraph {
                message: format!("edge endpoint {key:?} is not a node of the graph"),
            })
        };

        let mut endpoints = Vec::with_capacity(self.edges.len());
        let mut outgoing = vec![Vec::new(); self.nodes.len()];
        for (e, edge) in self.edges.iter().enumerate() {
            let from = lookup(&edge.from)?;
            let to = lookup(&edge.to)?;
            outgoing[from].push(e);
            endpoints.push((from, to));
        }

        Ok(IndexedGraph {
            root,
            endpoints,
            outgoing,
        })
    }

    /// Check that node ids are unique and every edge connects known nodes.
    pub fn validate_keys(&self) -> Result<()> {
        self.indexed().map(|_| ())
    }
}

impl<K, P, M> Graph<K, P, M>
where
    K: NodeKey,
    P: Eq + Hash,
    M: Eq + Hash,
{
    /// Node-set and edge-set equality, independent of insertion order.
    pub fn content_eq(&self, other: &Self) -> bool {
        if self.root != other.root
            || self.nodes.len() != other.nodes.len()
            || self.edges.len() != other.edges.len()
        {
            return false;
        }

        let nodes: HashSet<&Node<K, P>> = self.nodes.iter().collect();
        let edges: HashSet<&Edge<K, M>> = self.edges.iter().collect();
        other.nodes.iter().all(|n| nodes.contains(n)) && other.edges.iter().all(|e| edges.contains(e))
    }

    /// Report the first duplicate `(from, to, tag)` edge, if any.
    pub fn find_duplicate_edge(&self) -> Option<&Edge<K, M>> {
        let mut seen = HashSet::with_capacity(self.edges.len());
        self.edges.iter().find(|edge| !seen.insert(*edge))
    }
}
