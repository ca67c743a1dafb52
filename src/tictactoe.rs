//! Tic-Tac-Toe board model and state-space enumeration

pub mod board;
pub mod game;
pub mod lines;
pub mod state_graph;
pub mod validation;

pub use board::{BoardState, Cell, Player};
pub use game::{Move, TerminalStatus};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use state_graph::{
    GameGraph, GameTree, STANDARD_EDGE_COUNT, STANDARD_NODE_COUNT, StateGraphSummary, Traversal,
    build_game_tree, enumerate_states, format_board, summarize, verify_standard_counts,
};
pub use validation::{count_valid_states, validate_game_graph};
