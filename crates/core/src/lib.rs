//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management and simulation. It
//! has no dependencies on UI, input devices or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed and action sequence replays the same game
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: the terminal front end is just one possible consumer
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision queries and line clearing
//! - [`pieces`]: the seven-piece catalog and clockwise shape rotation
//! - [`game_state`]: active piece control, lock/clear/respawn, status machine
//! - [`scoring`]: line-clear points, level derivation, tick period
//! - [`clock`]: decides when the loop's tick timer must be re-armed
//! - [`rng`]: seeded uniform piece selection
//! - [`snapshot`]: read-only presentation view
//!
//! # Game Rules
//!
//! - Pieces spawn horizontally centered on row 0; a spawn that does not fit ends the game
//! - Rotation is a clockwise quarter turn in place, with no wall kicks
//! - A piece that cannot fall locks immediately on the next drop
//! - Clearing `n` lines scores `n * 100 * level`; level is `score / 1000 + 1`
//!
//! # Example
//!
//! ```
//! use artetris_core::GameState;
//! use artetris_types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! game.tick(); // spawns the first piece
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::SoftDrop);
//!
//! game.apply_action(GameAction::TogglePause);
//! assert_eq!(game.status(), GameStatus::Paused);
//! assert!(!game.tick());
//! ```
//!
//! # Timing
//!
//! The core does not track time. The loop calls
//! [`GameState::tick`](game_state::GameState::tick) once per period and asks
//! [`DropClock`](clock::DropClock) whether the period changed.

pub mod board;
pub mod clock;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use artetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::DropClock;
pub use game_state::{ActivePiece, DropOutcome, GameState, LockEvent};
pub use pieces::{spawn_shape, template, PieceTemplate, Shape, CATALOG};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{calculate_level, calculate_line_score, get_drop_interval_ms, Scoreboard};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
