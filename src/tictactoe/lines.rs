//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub static WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        Self::completed_lines(cells, player).next().is_some()
    }

    /// Lines fully occupied by `player`.
    pub fn completed_lines(
        cells: &[Cell; 9],
        player: Player,
    ) -> impl Iterator<Item = &'static [usize; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(move |line| line.iter().all(|&idx| cells[idx] == target))
    }
}
