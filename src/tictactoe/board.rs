//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::game::{Move, TerminalStatus};
use crate::error::{Error, MoveRejection};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player who opens every game.
    pub const FIRST: Player = Player::X;

    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// The turn rule: X opens and players strictly alternate, so X is to move
    /// whenever both players have placed the same number of marks and O is to
    /// move when X is exactly one mark ahead. Any other pair of counts cannot
    /// arise through play.
    pub fn to_move(x_count: usize, o_count: usize) -> Result<Player, Error> {
        if x_count == o_count {
            Ok(Player::FIRST)
        } else if x_count == o_count + 1 {
            Ok(Player::FIRST.opponent())
        } else {
            Err(Error::InvalidPieceCounts { x_count, o_count })
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// A 3x3 board configuration.
///
/// Only the grid is stored; whose turn it is follows from the mark counts via
/// [`Player::to_move`]. Equality is cell-wise, with no symmetry reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// The empty board, the single start node of every state graph.
    pub fn initial() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
        }
    }

    /// Helper: Parse 9 cells from a slice of characters.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 characters or any character is invalid.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], Error> {
        if chars.len() < 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    fn parse_player(player_str: &str, context: &str) -> Result<Player, Error> {
        match player_str {
            "X" => Ok(Player::X),
            "O" => Ok(Player::O),
            _ => Err(Error::InvalidPlayerString {
                player: player_str.to_string(),
                label: context.to_string(),
            }),
        }
    }

    fn ensure_turn_matches(cells: &[Cell; 9], player: Player, context: &str) -> Result<(), Error> {
        let count = Self::count_pieces(cells);
        let expected = Player::to_move(count.x, count.o)?;
        if expected == player {
            Ok(())
        } else {
            Err(Error::InvalidConfiguration {
                message: format!(
                    "piece counts (X={}, O={}) are inconsistent with {player} to move in '{context}'",
                    count.x, count.o
                ),
            })
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 characters (whitespace is filtered out) and
    /// may optionally include a suffix `_X` or `_O`. A suffix must agree with
    /// the player the mark counts put on move.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board part has fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are impossible under X-first alternation
    /// - A provided `_X`/`_O` suffix conflicts with the piece counts
    pub fn from_string(s: &str) -> Result<Self, Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, specified_turn) = Self::split_board_and_turn(&cleaned)?;
        let chars: Vec<char> = board_part.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;
        let count = Self::count_pieces(&cells);
        Player::to_move(count.x, count.o)?;

        if let Some(turn) = specified_turn {
            Self::ensure_turn_matches(&cells, turn, s)?;
        }

        Ok(BoardState { cells })
    }

    fn split_board_and_turn(cleaned: &str) -> Result<(&str, Option<Player>), Error> {
        if let Some(idx) = cleaned.find('_') {
            let board = &cleaned[..idx];
            let suffix = &cleaned[idx + 1..];
            if suffix.is_empty() {
                return Err(Error::InvalidPlayerString {
                    player: String::new(),
                    label: cleaned.to_string(),
                });
            }
            let player = Self::parse_player(suffix, cleaned)?;
            Ok((board, Some(player)))
        } else {
            Ok((cleaned, None))
        }
    }

    /// Create a board from its encoded label `"XXXXXXXXX_P"` where P is the
    /// player to move.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The label format is invalid (not "board_player")
    /// - The board part is not exactly 9 characters
    /// - Any character is not a valid cell representation
    /// - The player part is not "X" or "O", or disagrees with the mark counts
    /// - Both players have a winning line
    pub fn from_label(label: &str) -> Result<Self, Error> {
        let mut parts = label.split('_');
        let board = parts.next().ok_or_else(|| Error::MissingLabelPart {
            part: "board".to_string(),
            label: label.to_string(),
        })?;
        let to_move_str = parts.next().ok_or_else(|| Error::MissingLabelPart {
            part: "player".to_string(),
            label: label.to_string(),
        })?;

        if parts.next().is_some() || board.len() != 9 {
            return Err(Error::InvalidLabelFormat {
                label: label.to_string(),
                expected: "XXXXXXXXX_P".to_string(),
            });
        }

        let chars: Vec<char> = board.chars().collect();
        let cells = Self::parse_cells(&chars, label)?;
        let to_move = Self::parse_player(to_move_str, label)?;
        Self::ensure_turn_matches(&cells, to_move, label)?;

        let board = BoardState { cells };
        if board.has_won(Player::X) && board.has_won(Player::O) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "invalid board label '{label}': both players cannot have winning lines"
                ),
            });
        }

        Ok(board)
    }

    /// The player whose mark the next move places.
    pub fn turn(&self) -> Player {
        let count = Self::count_pieces(&self.cells);
        // Every BoardState is built from `initial` by legal moves or by a
        // parser that checks the counts, so the rule always yields a player.
        if count.x > count.o {
            Player::O
        } else {
            Player::X
        }
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Apply a move and return the successor board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] if the position is outside the board,
    /// the game is already over, the cell is occupied, or the mark is not the
    /// one [`turn`](Self::turn) dictates.
    #[must_use = "apply returns a new board state; the original is unchanged"]
    pub fn apply(&self, mv: Move) -> Result<BoardState, Error> {
        let reject = |reason| Error::InvalidMove {
            position: mv.position,
            reason,
        };

        if mv.position >= 9 {
            return Err(reject(MoveRejection::OutOfBounds));
        }
        if self.is_terminal() {
            return Err(reject(MoveRejection::GameOver));
        }
        if !self.is_empty(mv.position) {
            return Err(reject(MoveRejection::Occupied));
        }
        if mv.player != self.turn() {
            return Err(reject(MoveRejection::WrongMark));
        }

        let mut next = *self;
        next.cells[mv.position] = mv.player.to_cell();
        Ok(next)
    }

    /// Place the current player's mark at `pos`.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState, Error> {
        self.apply(Move::new(pos, self.turn()))
    }

    /// Legal moves in this position, in ascending cell order.
    ///
    /// Empty once the game is over.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> {
        let player = self.turn();
        let open = !self.is_terminal();
        let cells = self.cells;
        (0..9)
            .filter(move |&pos| open && cells[pos] == Cell::Empty)
            .map(move |position| Move::new(position, player))
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, player)
    }

    /// Evaluate the eight winning lines.
    ///
    /// A win for X is reported ahead of a win for O; a double win cannot be
    /// reached through legal play because no moves follow a terminal state.
    pub fn terminal(&self) -> TerminalStatus {
        if self.has_won(Player::X) {
            TerminalStatus::XWins
        } else if self.has_won(Player::O) {
            TerminalStatus::OWins
        } else if !self.cells.contains(&Cell::Empty) {
            TerminalStatus::Draw
        } else {
            TerminalStatus::InProgress
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.terminal().is_terminal()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        self.terminal().winner()
    }

    /// Get a canonical string representation for use as a key
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.turn()
        )
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
