use serde::Serialize;

use crate::game_state::ActivePiece;
use crate::types::{Cell, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Position and footprint of the active piece at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub width: u8,
    pub height: u8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            width: value.shape.width(),
            height: value.shape.height(),
        }
    }
}

/// Read-only view of a game for presentation and logging.
///
/// `board` already has the active piece drawn in when the game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .flatten()
    }

    pub fn filled_count(&self) -> usize {
        self.board.iter().flatten().filter(|c| c.is_some()).count()
    }
}
