//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use stategraph::{
    graph::Graph,
    tictactoe::{BoardState, GameGraph, Traversal, enumerate_states},
};

/// The breadth-first state graph, built once per test binary.
pub fn game_graph() -> &'static GameGraph {
    static GRAPH: OnceLock<GameGraph> = OnceLock::new();
    GRAPH.get_or_init(|| {
        enumerate_states(Traversal::BreadthFirst).expect("Enumeration should succeed")
    })
}

/// Play `positions` from the empty board, alternating marks from X.
pub fn play(positions: &[usize]) -> BoardState {
    positions
        .iter()
        .fold(BoardState::initial(), |board, &pos| {
            board
                .make_move(pos)
                .unwrap_or_else(|e| panic!("move {pos} rejected on {board}: {e}"))
        })
}

/// `a -> b`, `a -> c`, `b -> d`, `c -> d`.
pub fn diamond() -> Graph<&'static str, u8, &'static str> {
    let mut graph = Graph::new("a");
    for (payload, id) in ["a", "b", "c", "d"].into_iter().enumerate() {
        graph.add_node(id, payload as u8);
    }
    graph.add_edge("a", "b", "ab");
    graph.add_edge("a", "c", "ac");
    graph.add_edge("b", "d", "bd");
    graph.add_edge("c", "d", "cd");
    graph
}
