//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. On-screen or
//! scripted controls should produce the same actions and go through the same
//! `GameState::apply_action` entry point; nothing here touches game state.

pub mod map;

pub use artetris_types as types;

pub use map::{handle_key_event, should_quit, KEY_HELP};
