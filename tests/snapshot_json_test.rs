//! Snapshots serialize to the JSON shape written to the log on game over.

use serde::Deserialize;

use artetris::core::{Board, GameState};
use artetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Deserialize)]
struct ActiveJson {
    kind: String,
    x: i8,
    y: i8,
    width: u8,
    height: u8,
}

#[derive(Debug, Deserialize)]
struct SnapshotJson {
    board: Vec<Vec<Option<String>>>,
    active: Option<ActiveJson>,
    score: u32,
    level: u32,
    lines: u32,
    status: String,
}

#[test]
fn running_snapshot_shape() {
    let mut state = GameState::new(1);
    state.spawn_kind(PieceKind::J);

    let json = serde_json::to_string(&state.snapshot()).unwrap();
    let parsed: SnapshotJson = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.board.len(), BOARD_HEIGHT as usize);
    assert!(parsed
        .board
        .iter()
        .all(|row| row.len() == BOARD_WIDTH as usize));
    assert_eq!(parsed.board[0][4].as_deref(), Some("J"));
    assert_eq!(parsed.board[19][0], None);

    let active = parsed.active.unwrap();
    assert_eq!(active.kind, "J");
    assert_eq!((active.x, active.y), (4, 0));
    assert_eq!((active.width, active.height), (3, 2));

    assert_eq!((parsed.score, parsed.level, parsed.lines), (0, 1, 0));
    assert_eq!(parsed.status, "running");
}

#[test]
fn game_over_snapshot_has_no_active_piece() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 1, Some(PieceKind::Z));
    }
    board.set(0, 1, None);
    let mut state = GameState::with_board(1, board);
    state.spawn_kind(PieceKind::O);

    let value = serde_json::to_value(state.snapshot()).unwrap();
    assert_eq!(value["status"], "gameover");
    assert!(value["active"].is_null());
    assert_eq!(value["board"][1][1], "Z");
    assert!(value["board"][1][0].is_null());
}
