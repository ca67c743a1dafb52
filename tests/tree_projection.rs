//! Projection of graphs onto trees, including the full game graph.

mod common;

use std::collections::HashSet;

use common::{diamond, game_graph};
use stategraph::{
    Error,
    graph::{Graph, project},
    tictactoe::{STANDARD_EDGE_COUNT, STANDARD_NODE_COUNT, Traversal, build_game_tree},
};

#[test]
fn game_tree_keeps_every_node_and_edge() {
    let tree = project(game_graph()).unwrap();
    assert_eq!(tree.node_count(), STANDARD_NODE_COUNT);
    assert_eq!(tree.tree_edge_count(), STANDARD_NODE_COUNT - 1);
    assert_eq!(
        tree.cross_ref_count(),
        STANDARD_EDGE_COUNT - (STANDARD_NODE_COUNT - 1)
    );
    assert_eq!(tree.max_depth(), 9);
    assert_eq!(tree.root, "........._X");
    assert!(tree.to_graph().content_eq(game_graph()));
}

#[test]
fn game_tree_depth_is_marks_placed() {
    let tree = build_game_tree(Traversal::BreadthFirst).unwrap();
    for node in &tree.nodes {
        let board = node.id.to_board().unwrap();
        assert_eq!(node.depth, board.occupied_count(), "{}", node.id);
    }
}

#[test]
fn parent_links_replay_to_their_child() {
    let tree = project(game_graph()).unwrap();
    let root = &tree.nodes[0];
    assert!(root.parent.is_none());

    for node in tree.nodes.iter().skip(1) {
        let link = node.parent.as_ref().expect("Non-root nodes have a parent");
        let parent = link.node.to_board().unwrap();
        let child = parent.apply(link.tag).unwrap();
        assert_eq!(child.encode(), node.id.as_str());

        let parent_node = tree.get(&link.node).unwrap();
        assert!(parent_node.children.contains(&node.id));
        assert_eq!(parent_node.depth + 1, node.depth);
    }
}

#[test]
fn cross_references_never_repeat_a_tree_edge() {
    let tree = project(game_graph()).unwrap();
    let tree_edges: HashSet<(&str, &str)> = tree
        .nodes
        .iter()
        .filter_map(|n| {
            n.parent
                .as_ref()
                .map(|p| (p.node.as_str(), n.id.as_str()))
        })
        .collect();
    assert!(
        tree.cross_refs
            .iter()
            .all(|e| !tree_edges.contains(&(e.from.as_str(), e.to.as_str())))
    );
}

#[test]
fn first_discovery_wins_in_a_diamond() {
    let tree = project(&diamond()).unwrap();
    let d = tree.get(&"d").unwrap();
    assert_eq!(d.parent.as_ref().map(|p| p.node), Some("b"));
    assert_eq!(d.parent.as_ref().map(|p| p.tag), Some("bd"));
    assert_eq!(tree.cross_refs.len(), 1);
    assert_eq!(tree.cross_refs[0].from, "c");
    assert_eq!(tree.cross_refs[0].to, "d");
}

#[test]
fn back_edges_become_cross_references() {
    let mut graph = diamond();
    graph.add_edge("d", "a", "da");
    let tree = project(&graph).unwrap();
    assert_eq!(tree.node_count(), 4);
    assert_eq!(tree.cross_ref_count(), 2);
    assert!(tree.to_graph().content_eq(&graph));
}

#[test]
fn unreachable_nodes_are_rejected() {
    let mut graph = diamond();
    graph.add_node("island", 9);
    let err = project(&graph).unwrap_err();
    assert!(matches!(err, Error::InvalidGraph { .. }));
    assert!(err.to_string().contains("unreachable"));
}

#[test]
fn dangling_edges_are_rejected() {
    let mut graph = diamond();
    graph.add_edge("d", "nowhere", "dn");
    assert!(matches!(project(&graph), Err(Error::InvalidGraph { .. })));

    let empty: Graph<&str, u8, &str> = Graph::new("missing");
    assert!(project(&empty).is_err());
}
