//! End-to-end board scenarios.

mod common;

use common::play;
use stategraph::{
    Error,
    error::MoveRejection,
    tictactoe::{BoardState, Move, Player, TerminalStatus},
};

#[test]
fn first_move_in_the_corner() {
    let board = BoardState::initial()
        .apply(Move::at(0, 0, Player::X))
        .unwrap();
    assert_eq!(board.encode(), "X........_O");
    assert_eq!(board.turn(), Player::O);
    assert_eq!(board.legal_moves().count(), 8);
    assert_eq!(board.terminal(), TerminalStatus::InProgress);
}

#[test]
fn x_completes_the_top_row_on_a_full_board() {
    let board = play(&[0, 3, 5, 4, 6, 7, 2, 8, 1]);
    assert_eq!(board.occupied_count(), 9);
    assert_eq!(board.terminal(), TerminalStatus::XWins);
    assert_eq!(board.winner(), Some(Player::X));
    assert_eq!(board.legal_moves().count(), 0);
}

#[test]
fn o_wins_on_the_diagonal() {
    let board = play(&[1, 2, 3, 4, 8, 6]);
    assert_eq!(board.terminal(), TerminalStatus::OWins);
    assert!(board.is_terminal());
}

#[test]
fn full_board_without_a_line_is_a_draw() {
    let board = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(board.terminal(), TerminalStatus::Draw);
    assert_eq!(board.winner(), None);
}

#[test]
fn illegal_moves_are_rejected() {
    let board = play(&[4]);

    let occupied = board.apply(Move::new(4, Player::O)).unwrap_err();
    assert!(matches!(
        occupied,
        Error::InvalidMove {
            position: 4,
            reason: MoveRejection::Occupied
        }
    ));

    let out_of_bounds = board.apply(Move::new(9, Player::O)).unwrap_err();
    assert!(matches!(
        out_of_bounds,
        Error::InvalidMove {
            reason: MoveRejection::OutOfBounds,
            ..
        }
    ));

    let wrong_mark = board.apply(Move::new(0, Player::X)).unwrap_err();
    assert!(matches!(
        wrong_mark,
        Error::InvalidMove {
            reason: MoveRejection::WrongMark,
            ..
        }
    ));

    let finished = play(&[0, 3, 1, 4, 2]);
    let game_over = finished.apply(Move::new(8, Player::O)).unwrap_err();
    assert!(matches!(
        game_over,
        Error::InvalidMove {
            reason: MoveRejection::GameOver,
            ..
        }
    ));
}

#[test]
fn apply_leaves_the_original_board_untouched() {
    let before = play(&[0, 4]);
    let after = before.apply(Move::new(8, Player::X)).unwrap();
    assert_eq!(before.occupied_count(), 2);
    assert_eq!(after.occupied_count(), 3);
    assert!(before.is_empty(8));
}

#[test]
fn labels_roundtrip_through_parsing() {
    let board = play(&[0, 4, 8]);
    let parsed = BoardState::from_label(&board.encode()).unwrap();
    assert_eq!(parsed, board);
    assert!(BoardState::from_string("XX.......").is_err());
    assert!(BoardState::from_label("X........_X").is_err());
}
