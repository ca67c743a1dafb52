//! Identifier types for game-state nodes.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

use crate::tictactoe::BoardState;

/// Unique identifier for a board state in the state graph.
///
/// The identifier is the board's canonical encoding (see [`BoardState::encode`]),
/// so two ids are equal exactly when the boards are cell-wise identical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    /// Create a new state identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use stategraph::identifiers::StateId;
    ///
    /// let state = StateId::new("X........_O");
    /// assert_eq!(state.as_str(), "X........_O");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the identifier back into the board it names.
    pub fn to_board(&self) -> crate::Result<BoardState> {
        BoardState::from_label(&self.0)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for StateId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&BoardState> for StateId {
    fn from(state: &BoardState) -> Self {
        Self(state.encode())
    }
}

impl From<String> for StateId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for StateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for StateId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_roundtrips_through_board() {
        let board = BoardState::initial().make_move(4).unwrap();
        let id = StateId::from(&board);
        assert_eq!(id, "....X...._O");
        assert_eq!(id.to_board().unwrap(), board);
    }
}
