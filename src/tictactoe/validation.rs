//! Board validity and state-graph invariant checks

use std::collections::{HashMap, HashSet};

use super::{
    board::{BoardState, Cell, Player},
    lines::LineAnalyzer,
    state_graph::GameGraph,
};
use crate::{Result, error::Error};

impl BoardState {
    /// Check if the board could arise through legal X-first play
    pub fn is_valid(&self) -> bool {
        let x_count = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = self.cells.iter().filter(|&&c| c == Cell::O).count();

        if Player::to_move(x_count, o_count).is_err() {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner must have made the last move.
        if x_wins && x_count != o_count + 1 {
            return false;
        }
        if o_wins && o_count != x_count {
            return false;
        }

        // Several winning lines are only possible if one move completed all of them.
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines: Vec<_> = LineAnalyzer::completed_lines(&self.cells, player).collect();
        if lines.len() < 2 {
            return true;
        }
        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}

fn violation(message: String) -> Error {
    Error::InvariantViolation { message }
}

/// Check every structural invariant of a Tic-Tac-Toe state graph:
///
/// - node ids are unique, decode to valid boards, and carry the board's status
/// - no `(from, to, move)` edge appears twice
/// - every edge places the mover's mark in an empty cell of a non-terminal
///   board and leads to exactly the resulting board
/// - the root is the empty board and the only node without incoming edges
/// - terminal nodes have no outgoing edges; other nodes have one per empty cell
pub fn validate_game_graph(graph: &GameGraph) -> Result<()> {
    graph.validate_keys()?;

    let mut boards = HashMap::with_capacity(graph.node_count());
    for node in &graph.nodes {
        let board = node.id.to_board()?;
        if !board.is_valid() {
            return Err(violation(format!("node {} is not a reachable board", node.id)));
        }
        if board.terminal() != node.payload {
            return Err(violation(format!(
                "node {} is labelled {} but evaluates to {}",
                node.id,
                node.payload,
                board.terminal()
            )));
        }
        boards.insert(&node.id, board);
    }

    if let Some(edge) = graph.find_duplicate_edge() {
        return Err(violation(format!(
            "duplicate edge {} -> {} ({})",
            edge.from, edge.to, edge.tag
        )));
    }

    for edge in &graph.edges {
        let from = boards[&edge.from];
        let to = boards[&edge.to];
        let expected = from.apply(edge.tag).map_err(|e| {
            violation(format!("edge {} -> {} is illegal: {e}", edge.from, edge.to))
        })?;
        if expected != to {
            return Err(violation(format!(
                "edge {} -> {} does not match move {}",
                edge.from, edge.to, edge.tag
            )));
        }
        if to.occupied_count() != from.occupied_count() + 1 {
            return Err(violation(format!(
                "edge {} -> {} does not add exactly one mark",
                edge.from, edge.to
            )));
        }
    }

    let root = boards[&graph.root];
    if root != BoardState::initial() {
        return Err(violation(format!("root {} is not the empty board", graph.root)));
    }

    let in_degrees = graph.in_degrees();
    let successors = graph.successors();
    for node in &graph.nodes {
        let board = boards[&node.id];
        let incoming = in_degrees[&node.id];
        let outgoing = successors.get(&node.id).map_or(0, Vec::len);

        if node.id == graph.root {
            if incoming != 0 {
                return Err(violation(format!("root has {incoming} incoming edges")));
            }
        } else if incoming == 0 {
            return Err(violation(format!("node {} has no incoming edge", node.id)));
        }

        let expected_out = if board.is_terminal() {
            0
        } else {
            board.empty_positions().len()
        };
        if outgoing != expected_out {
            return Err(violation(format!(
                "node {} has {outgoing} outgoing edges, expected {expected_out}",
                node.id
            )));
        }
    }

    Ok(())
}

/// Count boards reachable from the empty board by a depth-first walk,
/// independent of the graph builder.
pub fn count_valid_states() -> usize {
    let mut stack = vec![BoardState::initial()];
    let mut seen = HashSet::new();

    while let Some(state) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        for mv in state.legal_moves() {
            if let Ok(next) = state.apply(mv) {
                stack.push(next);
            }
        }
    }

    seen.len()
}
