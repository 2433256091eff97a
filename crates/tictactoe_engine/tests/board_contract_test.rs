//! Tests for the board move contract.

use tictactoe_engine::{Board, MoveError, Player, Square};

#[test]
fn test_turn_alternation_over_a_full_game() {
    let mut board = Board::new(3);
    let order = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 2),
        (1, 1),
        (2, 0),
        (2, 2),
        (2, 1),
    ];
    let mut expected = Player::X;
    for (row, col) in order {
        assert_eq!(board.current_turn(), expected);
        let mover = board.apply_move(row, col).expect("cell is empty");
        assert_eq!(mover, expected);
        expected = expected.opponent();
    }
}

#[test]
fn test_no_overwrite_leaves_board_identical() {
    let mut board = Board::new(3);
    board.apply_move(0, 0).unwrap();
    let after_first = board.clone();

    assert_eq!(
        board.apply_move(0, 0),
        Err(MoveError::CellOccupied { row: 0, col: 0 })
    );
    assert_eq!(board, after_first);
    assert_eq!(board.current_turn(), Player::O);
}

#[test]
fn test_out_of_bounds_never_mutates() {
    let mut board = Board::new(3);
    let empty = board.clone();
    assert!(matches!(
        board.apply_move(0, 3),
        Err(MoveError::OutOfBounds { .. })
    ));
    assert!(matches!(
        board.apply_move(9, 9),
        Err(MoveError::OutOfBounds { .. })
    ));
    assert_eq!(board, empty);
}

#[test]
fn test_winner_and_tie_are_orthogonal_predicates() {
    // X wins on the very last move: board is full AND X has a line.
    // Winner must be consulted first; is_tie alone would misclassify.
    let mut board = Board::new(3);
    for (row, col) in [
        (0, 0), // X
        (1, 0), // O
        (0, 1), // X
        (1, 1), // O
        (2, 0), // X
        (2, 1), // O
        (1, 2), // X
        (2, 2), // O
        (0, 2), // X completes the top row
    ] {
        board.apply_move(row, col).unwrap();
    }
    assert!(board.is_tie()); // full board
    assert_eq!(board.winner_if_any(), Some(Player::X));
    assert!(board.is_winner(Player::X));
    assert!(!board.is_winner(Player::O));
}

#[test]
fn test_board_generalizes_beyond_three() {
    let mut board = Board::new(4);
    assert_eq!(board.iter().count(), 16);
    // X takes the whole top row, O follows along the bottom.
    for col in 0..4 {
        board.apply_move(0, col).unwrap(); // X
        if col < 3 {
            board.apply_move(3, col).unwrap(); // O
        }
    }
    assert_eq!(board.winner_if_any(), Some(Player::X));
}

#[test]
fn test_squares_snapshot_matches_iteration() {
    let mut board = Board::new(3);
    board.apply_move(2, 2).unwrap();
    let from_iter: Vec<Square> = board.iter().collect();
    assert_eq!(board.squares(), from_iter.as_slice());
}
