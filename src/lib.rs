//! ARTetris (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds the pieces that
//! tie them into a program: configuration, logging and the game loop.

pub use artetris_core as core;
pub use artetris_input as input;
pub use artetris_term as term;
pub use artetris_types as types;

pub mod config;
pub mod logging;
pub mod runtime;

pub use config::GameConfig;
pub use runtime::{GameLoop, LoopEvent};
