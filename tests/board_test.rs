//! Tests for board state, win detection, and serialization.

use gomoku_arena::{Board, BoardError, Mark};

fn mark_run(board: &mut Board, mark: Mark, cells: &[(u32, u32)]) {
    for &(x, y) in cells {
        board.mark(x, y, mark).expect("mark in range");
    }
}

#[test]
fn test_new_board_has_no_winner_and_is_not_full() {
    let board = Board::new(7, 6);
    assert_eq!(board.winner(), None);
    assert!(!board.is_full());
}

#[test]
fn test_mark_and_get_round_trip() {
    let mut board = Board::new(5, 5);
    board.mark(3, 2, Mark::X).expect("mark failed");
    assert_eq!(board.get(3, 2), Some(Mark::X));
    assert_eq!(board.get(2, 3), Some(Mark::Empty));
}

#[test]
fn test_mark_out_of_bounds_is_rejected() {
    let mut board = Board::new(5, 5);
    for (x, y) in [(0, 1), (1, 0), (6, 1), (1, 6)] {
        let err = board.mark(x, y, Mark::X).expect_err("out of range accepted");
        assert!(matches!(err, BoardError::OutOfBounds { .. }));
    }
}

#[test]
fn test_four_in_a_row_is_not_a_win() {
    let mut board = Board::new(10, 10);
    mark_run(&mut board, Mark::X, &[(1, 1), (2, 1), (3, 1), (4, 1)]);
    mark_run(&mut board, Mark::X, &[(6, 6), (6, 7), (6, 8), (6, 9)]);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_horizontal_run_of_five_wins() {
    let mut board = Board::new(10, 10);
    mark_run(&mut board, Mark::X, &[(3, 4), (4, 4), (5, 4), (6, 4), (7, 4)]);
    assert_eq!(board.winner(), Some(Mark::X));
}

#[test]
fn test_vertical_run_of_five_wins() {
    let mut board = Board::new(10, 10);
    mark_run(&mut board, Mark::O, &[(2, 3), (2, 4), (2, 5), (2, 6), (2, 7)]);
    assert_eq!(board.winner(), Some(Mark::O));
}

#[test]
fn test_interrupted_run_resets_the_count() {
    let mut board = Board::new(10, 10);
    mark_run(&mut board, Mark::X, &[(1, 1), (2, 1), (3, 1), (5, 1), (6, 1)]);
    board.mark(4, 1, Mark::O).expect("mark failed");
    assert_eq!(board.winner(), None);
}

#[test]
fn test_diagonal_run_of_five_is_not_detected() {
    // Diagonal lines are intentionally not checked.
    let mut board = Board::new(10, 10);
    mark_run(&mut board, Mark::X, &[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_player_o_wins_the_tie_break() {
    let mut board = Board::new(10, 10);
    mark_run(&mut board, Mark::X, &[(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)]);
    mark_run(&mut board, Mark::O, &[(1, 2), (2, 2), (3, 2), (4, 2), (5, 2)]);
    assert_eq!(board.winner(), Some(Mark::O));
}

#[test]
fn test_is_full_requires_every_cell() {
    let mut board = Board::new(2, 2);
    board.mark(1, 1, Mark::X).expect("mark failed");
    board.mark(2, 1, Mark::O).expect("mark failed");
    board.mark(1, 2, Mark::X).expect("mark failed");
    assert!(!board.is_full());
    board.mark(2, 2, Mark::O).expect("mark failed");
    assert!(board.is_full());
}

#[test]
fn test_encode_decode_round_trip() {
    let mut board = Board::new(4, 3);
    board.mark(1, 1, Mark::X).expect("mark failed");
    board.mark(4, 2, Mark::O).expect("mark failed");
    board.mark(2, 3, Mark::X).expect("mark failed");

    let table = board.encode();
    assert_eq!(table.len(), 12);
    assert_eq!(table, "X------O-X--");

    let decoded = Board::decode(4, 3, &table).expect("decode failed");
    assert_eq!(decoded, board);
}

#[test]
fn test_decode_rejects_wrong_length() {
    let err = Board::decode(3, 3, "----").expect_err("bad length accepted");
    assert_eq!(
        err,
        BoardError::TableLength {
            expected: 9,
            actual: 4
        }
    );
}

#[test]
fn test_decode_rejects_unknown_mark() {
    let err = Board::decode(2, 2, "X-?O").expect_err("bad mark accepted");
    assert_eq!(err, BoardError::UnknownMark { found: '?' });
}

#[test]
fn test_mark_display_matches_wire_encoding() {
    assert_eq!(Mark::X.to_string(), "X");
    assert_eq!(Mark::O.to_string(), "O");
    assert_eq!(Mark::Empty.to_string(), "-");
}
