//! Terminal presentation layer.
//!
//! Renders game snapshots into a framebuffer of styled glyphs and flushes
//! that framebuffer to the terminal. It never mutates game state; it only
//! reads [`core::GameSnapshot`] values.
//!
//! - [`fb`]: framebuffer and glyph styles
//! - [`game_view`]: snapshot -> framebuffer (pure, testable)
//! - [`renderer`]: framebuffer -> terminal (raw mode, alternate screen, row diffs)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use artetris_core as core;
pub use artetris_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{changed_rows, encode_changed_rows_into, encode_full_into, TerminalRenderer};
