//! Seeded synthetic graphs and trees.

use std::collections::HashSet;

use stategraph::{
    Error,
    codec::encode_binary,
    graph::project,
    synthetic::{SyntheticSpec, generate, generate_tree},
};

#[test]
fn same_seed_same_dataset() {
    let spec = SyntheticSpec::graph(400, 3).with_seed(42);
    assert_eq!(generate(&spec).unwrap(), generate(&spec).unwrap());

    let tree_spec = SyntheticSpec::tree(400, 3).with_seed(42);
    assert_eq!(
        generate_tree(&tree_spec).unwrap(),
        generate_tree(&tree_spec).unwrap()
    );

    let bytes = |spec: &SyntheticSpec| encode_binary(&generate(spec).unwrap(), true).unwrap();
    assert_eq!(bytes(&spec), bytes(&spec));
}

#[test]
fn different_seeds_differ() {
    let edges = |seed| {
        generate(&SyntheticSpec::graph(200, 3).with_seed(seed))
            .unwrap()
            .edges
            .into_iter()
            .map(|e| (e.from, e.to))
            .collect::<HashSet<_>>()
    };
    assert_ne!(edges(1), edges(2));
}

#[test]
fn graph_mode_converges_without_cycles() {
    let spec = SyntheticSpec::graph(500, 3).with_seed(7);
    let graph = generate(&spec).unwrap();

    assert_eq!(graph.node_count(), 500);
    assert!(graph.edge_count() > graph.node_count() - 1);
    assert!(graph.edges.iter().all(|e| e.from < e.to));
    assert!(graph.out_degrees().values().all(|&d| d <= 3));

    let in_degrees = graph.in_degrees();
    assert_eq!(in_degrees[&0u64], 0);
    assert!(graph.nodes.iter().skip(1).all(|n| in_degrees[&n.id] >= 1));
    assert!(in_degrees.values().any(|&d| d > 1));

    for node in &graph.nodes {
        assert!(node.payload.owner <= 1);
        assert!(matches!(node.payload.priority, Some(p) if p <= 15));
        assert!(node.payload.value.is_none());
    }

    let tree = project(&graph).expect("Every node is reachable from the root");
    assert_eq!(
        tree.cross_ref_count(),
        graph.edge_count() - (graph.node_count() - 1)
    );
}

#[test]
fn tree_mode_has_single_parents() {
    let spec = SyntheticSpec::tree(1_000, 4)
        .with_seed(3)
        .with_leaf_range(-100, 100);
    let tree = generate_tree(&spec).unwrap();

    assert_eq!(tree.node_count(), 1_000);
    assert_eq!(tree.cross_ref_count(), 0);
    for node in &tree.nodes {
        assert!(node.children.len() <= 4);
        let leaf = node.children.is_empty();
        assert_eq!(node.payload.value.is_some(), leaf);
        if let Some(value) = node.payload.value {
            assert!((-100..=100).contains(&value));
        }
    }
}

#[test]
fn unit_cap_builds_a_chain() {
    let tree = generate_tree(&SyntheticSpec::tree(25, 1).with_seed(9)).unwrap();
    assert_eq!(tree.max_depth(), 24);

    let graph = generate(&SyntheticSpec::graph(25, 1).with_seed(9)).unwrap();
    assert_eq!(graph.edge_count(), 24);
}

#[test]
fn single_node_is_a_lone_root() {
    let tree = generate_tree(&SyntheticSpec::tree(1, 3)).unwrap();
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.max_depth(), 0);
    assert!(tree.nodes[0].payload.value.is_some());
}

#[test]
fn invalid_requests_are_rejected() {
    for spec in [
        SyntheticSpec::graph(0, 3),
        SyntheticSpec::graph(-5, 3),
        SyntheticSpec::graph(10, 0),
        SyntheticSpec::tree(0, 2),
    ] {
        assert!(matches!(generate(&spec), Err(Error::InvalidSpec { .. })));
    }
}
