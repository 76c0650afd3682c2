//! Board tests - placement and line clearing through the public API

use artetris::core::{spawn_shape, Board};
use artetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(PieceKind::I));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.filled_count(), 0);
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_can_place_respects_walls_and_floor() {
    let board = Board::new();
    let o = spawn_shape(PieceKind::O);

    assert!(board.can_place(&o, 0, 0));
    assert!(board.can_place(&o, 8, 18));
    assert!(!board.can_place(&o, -1, 0));
    assert!(!board.can_place(&o, 9, 0));
    assert!(!board.can_place(&o, 0, 19));
}

#[test]
fn test_rows_above_top_are_free() {
    let board = Board::new();
    let i = spawn_shape(PieceKind::I).rotated_cw();
    assert!(board.can_place(&i, 0, -3));
    assert!(!board.can_place(&i, -1, -3));
}

#[test]
fn test_can_place_reports_overlap() {
    let mut board = Board::new();
    board.set(5, 10, Some(PieceKind::T));
    let o = spawn_shape(PieceKind::O);

    assert!(!board.can_place(&o, 4, 9));
    assert!(!board.can_place(&o, 5, 10));
    assert!(board.can_place(&o, 6, 10));
    assert!(board.can_place(&o, 3, 10));
}

#[test]
fn test_lock_skips_cells_above_top() {
    let mut board = Board::new();
    let i = spawn_shape(PieceKind::I).rotated_cw();
    board.lock(&i, PieceKind::I, 2, -2);

    assert_eq!(board.filled_count(), 2);
    assert!(board.is_occupied(2, 0));
    assert!(board.is_occupied(2, 1));
}

#[test]
fn test_clear_shifts_rows_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    fill_row(&mut board, 17);
    board.set(3, 18, Some(PieceKind::S));
    board.set(7, 16, Some(PieceKind::Z));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 17]);

    assert_eq!(board.get(3, 19), Some(Some(PieceKind::S)));
    assert_eq!(board.get(7, 18), Some(Some(PieceKind::Z)));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_is_idempotent() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    board.set(0, 18, Some(PieceKind::L));

    assert_eq!(board.clear_lines(), 1);
    let after = board.clone();
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, after);
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        fill_row(&mut board, y);
    }
    assert_eq!(board.clear_lines(), BOARD_HEIGHT as u32);
    assert_eq!(board, Board::new());
}
