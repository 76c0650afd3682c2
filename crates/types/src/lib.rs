//! Shared types and constants.
//!
//! Pure data with no game logic, usable from the core simulation, the terminal
//! front end and tests alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Drop Timing
//!
//! The falling piece steps down once per tick. The tick period depends on the
//! current level:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SPEED_MS` | 800 | Tick period at level 1 |
//! | `SPEED_INCREMENT_MS` | 50 | Period reduction per level |
//! | `MIN_SPEED_MS` | 100 | Fastest allowed period |
//!
//! # Examples
//!
//! ```
//! use artetris_types::{Color, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::O.color().to_hex(), "#FF8000");
//! assert_eq!(Color::from_hex("#ff8000"), Some(PieceKind::O.color()));
//! assert_eq!(GameAction::TogglePause.as_str(), "togglePause");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Tick period at level 1.
pub const INITIAL_SPEED_MS: u32 = 800;

/// Tick period reduction for each level above 1.
pub const SPEED_INCREMENT_MS: u32 = 50;

/// Lower bound on the tick period.
pub const MIN_SPEED_MS: u32 = 100;

/// Points per cleared line, multiplied by the level.
pub const POINTS_PER_LINE: u32 = 100;

/// Score needed to advance one level.
pub const SCORE_PER_LEVEL: u32 = 1000;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (case-insensitive).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    T,
    I,
    O,
    L,
    J,
    Z,
    S,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::I,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Display color of cells owned by this kind.
    pub const fn color(self) -> Color {
        match self {
            PieceKind::T => Color::new(0xFF, 0x00, 0x80),
            PieceKind::I => Color::new(0x00, 0xFF, 0x80),
            PieceKind::O => Color::new(0xFF, 0x80, 0x00),
            PieceKind::L => Color::new(0x00, 0x80, 0xFF),
            PieceKind::J => Color::new(0x80, 0x00, 0xFF),
            PieceKind::Z => Color::new(0xFF, 0x00, 0x00),
            PieceKind::S => Color::new(0x00, 0xFF, 0x00),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "T",
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
        }
    }
}

/// Cell on the board (None = empty, Some = locked by a piece of that kind)
pub type Cell = Option<PieceKind>;

/// Logical player intents, independent of the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    TogglePause,
    Reset,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::TogglePause => "togglePause",
            GameAction::Reset => "reset",
        }
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameover",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_colors_match_hex() {
        let expected = [
            (PieceKind::T, "#FF0080"),
            (PieceKind::I, "#00FF80"),
            (PieceKind::O, "#FF8000"),
            (PieceKind::L, "#0080FF"),
            (PieceKind::J, "#8000FF"),
            (PieceKind::Z, "#FF0000"),
            (PieceKind::S, "#00FF00"),
        ];
        for (kind, hex) in expected {
            assert_eq!(kind.color().to_hex(), hex, "{:?}", kind);
            assert_eq!(Color::from_hex(hex), Some(kind.color()));
        }
    }

    #[test]
    fn color_from_hex_rejects_malformed() {
        assert_eq!(Color::from_hex("FF8000"), None);
        assert_eq!(Color::from_hex("#FF80"), None);
        assert_eq!(Color::from_hex("#GG8000"), None);
        assert_eq!(Color::from_hex("#ff80é0"), None);
    }

    #[test]
    fn action_names_match_serde() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
            GameAction::TogglePause,
            GameAction::Reset,
        ] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&GameAction::TogglePause).unwrap(),
            "\"togglePause\""
        );
        assert_eq!(
            serde_json::from_str::<GameAction>("\"moveLeft\"").unwrap(),
            GameAction::MoveLeft
        );
        assert_eq!(
            serde_json::to_string(&GameStatus::GameOver).unwrap(),
            "\"gameover\""
        );
        assert_eq!(
            serde_json::to_string(&PieceKind::O.color()).unwrap(),
            "\"#FF8000\""
        );
    }
}
