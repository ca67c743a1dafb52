//! Moves and game outcomes

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Player;

/// A move: the cell a mark is placed in and the mark placed.
///
/// Cells are numbered row-major, `position = row * 3 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

impl Move {
    pub fn new(position: usize, player: Player) -> Self {
        Move { position, player }
    }

    /// Build a move from a `(row, col)` coordinate.
    pub fn at(row: usize, col: usize, player: Player) -> Self {
        Move::new(row * 3 + col, player)
    }

    pub fn row(&self) -> usize {
        self.position / 3
    }

    pub fn col(&self) -> usize {
        self.position % 3
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@({},{})", self.player, self.row(), self.col())
    }
}

/// Outcome of evaluating a board's winning lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalStatus {
    InProgress,
    XWins,
    OWins,
    Draw,
}

impl TerminalStatus {
    pub fn is_terminal(self) -> bool {
        self != TerminalStatus::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            TerminalStatus::XWins => Some(Player::X),
            TerminalStatus::OWins => Some(Player::O),
            TerminalStatus::InProgress | TerminalStatus::Draw => None,
        }
    }
}

impl fmt::Display for TerminalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TerminalStatus::InProgress => "in-progress",
            TerminalStatus::XWins => "x-wins",
            TerminalStatus::OWins => "o-wins",
            TerminalStatus::Draw => "draw",
        })
    }
}
