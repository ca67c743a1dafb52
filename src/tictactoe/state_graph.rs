//! Exhaustive enumeration of the reachable Tic-Tac-Toe state space

use std::collections::{HashSet, VecDeque};

use super::{
    board::BoardState,
    game::{Move, TerminalStatus},
};
use crate::{
    Result,
    error::Error,
    graph::{Graph, Tree, project},
    identifiers::StateId,
};

/// Every reachable board and every legal move between boards.
pub type GameGraph = Graph<StateId, TerminalStatus, Move>;

/// [`GameGraph`] projected onto a tree rooted at the empty board.
pub type GameTree = Tree<StateId, TerminalStatus, Move>;

/// Reachable boards in standard Tic-Tac-Toe.
pub const STANDARD_NODE_COUNT: usize = 5_478;

/// Legal moves between reachable boards in standard Tic-Tac-Toe.
pub const STANDARD_EDGE_COUNT: usize = 16_167;

/// Order in which the frontier is expanded.
///
/// Only the discovery order of nodes and edges depends on this; the node
/// and edge sets are identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Traversal {
    #[default]
    BreadthFirst,
    DepthFirst,
}

/// Build the state graph by exploring every board reachable from the empty
/// board. Each distinct board is expanded exactly once.
pub fn enumerate_states(traversal: Traversal) -> Result<GameGraph> {
    let start = BoardState::initial();
    let mut graph = GameGraph::new(StateId::from(&start));
    let mut discovered = HashSet::new();
    let mut frontier = VecDeque::new();

    discovered.insert(start);
    graph.add_node(StateId::from(&start), start.terminal());
    frontier.push_back(start);

    while let Some(state) = match traversal {
        Traversal::BreadthFirst => frontier.pop_front(),
        Traversal::DepthFirst => frontier.pop_back(),
    } {
        let from = StateId::from(&state);
        for mv in state.legal_moves() {
            let next = state.apply(mv)?;
            let to = StateId::from(&next);

            if discovered.insert(next) {
                graph.add_node(to.clone(), next.terminal());
                frontier.push_back(next);
            }
            graph.add_edge(from.clone(), to, mv);
        }
    }

    log::debug!(
        "enumerated {} states and {} moves ({traversal:?})",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Enumerate the state graph and project it onto a tree.
pub fn build_game_tree(traversal: Traversal) -> Result<GameTree> {
    let graph = enumerate_states(traversal)?;
    project(&graph)
}

/// Compare a graph's size against the known standard Tic-Tac-Toe counts.
///
/// A mismatch means move legality or terminal detection is broken.
pub fn verify_standard_counts(graph: &GameGraph) -> Result<()> {
    if graph.node_count() == STANDARD_NODE_COUNT && graph.edge_count() == STANDARD_EDGE_COUNT {
        Ok(())
    } else {
        Err(Error::CountMismatch {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            expected_nodes: STANDARD_NODE_COUNT,
            expected_edges: STANDARD_EDGE_COUNT,
        })
    }
}

/// Aggregate statistics about a state graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateGraphSummary {
    pub states: usize,
    pub moves: usize,
    /// Number of states per mark count (0..=9).
    pub states_by_depth: [usize; 10],
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl StateGraphSummary {
    pub fn terminal_states(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Count states by depth and terminal outcome.
pub fn summarize(graph: &GameGraph) -> Result<StateGraphSummary> {
    let mut summary = StateGraphSummary {
        states: graph.node_count(),
        moves: graph.edge_count(),
        ..Default::default()
    };

    for node in &graph.nodes {
        let board = node.id.to_board()?;
        summary.states_by_depth[board.occupied_count()] += 1;
        match node.payload {
            TerminalStatus::XWins => summary.x_wins += 1,
            TerminalStatus::OWins => summary.o_wins += 1,
            TerminalStatus::Draw => summary.draws += 1,
            TerminalStatus::InProgress => {}
        }
    }

    Ok(summary)
}

/// Render a board label as "XXX / OO. / ...", or `None` if it is not a
/// valid label.
pub fn format_board(label: &str) -> Option<String> {
    let board = BoardState::from_label(label).ok()?;
    let rows: Vec<String> = board
        .cells
        .chunks(3)
        .map(|row| row.iter().map(|cell| cell.to_char()).collect())
        .collect();
    Some(rows.join(" / "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breadth_first_matches_standard_counts() {
        let graph = enumerate_states(Traversal::BreadthFirst).unwrap();
        verify_standard_counts(&graph).unwrap();
    }

    #[test]
    fn root_comes_first() {
        let graph = enumerate_states(Traversal::DepthFirst).unwrap();
        assert_eq!(graph.root, "........._X");
        assert_eq!(graph.nodes[0].id, graph.root);
        assert_eq!(graph.nodes[0].payload, TerminalStatus::InProgress);
    }

    #[test]
    fn count_check_reports_mismatch() {
        let mut graph = enumerate_states(Traversal::BreadthFirst).unwrap();
        graph.edges.pop();
        let err = verify_standard_counts(&graph).unwrap_err();
        assert!(matches!(
            err,
            Error::CountMismatch {
                edges: 16_166,
                ..
            }
        ));
    }

    #[test]
    fn summary_matches_known_outcomes() {
        let graph = enumerate_states(Traversal::BreadthFirst).unwrap();
        let summary = summarize(&graph).unwrap();
        assert_eq!(
            summary.states_by_depth,
            [1, 9, 72, 252, 756, 1260, 1520, 1140, 390, 78]
        );
        assert_eq!(summary.x_wins, 626);
        assert_eq!(summary.o_wins, 316);
        assert_eq!(summary.draws, 16);
        assert_eq!(summary.terminal_states(), 958);
    }

    #[test]
    fn format_board_renders_rows() {
        assert_eq!(
            format_board("XO..X...O_X").as_deref(),
            Some("XO. / .X. / ..O")
        );
        assert_eq!(format_board("XO_X"), None);
        assert_eq!(format_board("€€€_X"), None);
        assert_eq!(format_board("€€€€€€€€€_X"), None);
        assert_eq!(format_board("XO..X...O_O"), None);
    }
}
