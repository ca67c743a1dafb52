//! Error types for the stategraph crate

use std::fmt;

use thiserror::Error;

/// Why a move was rejected by [`BoardState::apply`](crate::tictactoe::BoardState::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfBounds,
    Occupied,
    GameOver,
    WrongMark,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveRejection::OutOfBounds => "position is out of bounds (must be 0-8)",
            MoveRejection::Occupied => "position is already occupied",
            MoveRejection::GameOver => "game already over",
            MoveRejection::WrongMark => "mark does not belong to the player to move",
        };
        f.write_str(text)
    }
}

/// Main error type for the stategraph crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move at position {position}: {reason}")]
    InvalidMove {
        position: usize,
        reason: MoveRejection,
    },

    #[error("invalid synthetic spec: {message}")]
    InvalidSpec { message: String },

    #[error("malformed serialized data: {message}")]
    Format { message: String },

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error(
        "state graph has {nodes} nodes and {edges} edges, expected {expected_nodes} and {expected_edges}"
    )]
    CountMismatch {
        nodes: usize,
        edges: usize,
        expected_nodes: usize,
        expected_edges: usize,
    },

    #[error("graph invariant violated: {message}")]
    InvariantViolation { message: String },

    #[error("cannot project graph onto a tree: {message}")]
    InvalidGraph { message: String },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (X moves first, so X must be equal or ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid label format '{label}' (expected format: '{expected}')")]
    InvalidLabelFormat { label: String, expected: String },

    #[error("missing {part} in label '{label}'")]
    MissingLabelPart { part: String, label: String },

    #[error("invalid player '{player}' in label '{label}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, label: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Error::Format {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_spec(message: impl Into<String>) -> Self {
        Error::InvalidSpec {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
