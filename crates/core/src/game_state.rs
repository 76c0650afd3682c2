//! Game state module - the single owner of all mutable game state
//!
//! `GameState` ties together the board, the active piece, the randomizer and
//! the scoreboard. Every logical action and every clock tick goes through it,
//! one at a time, and runs to completion before the next one.

use tracing::{debug, info};

use crate::board::{Board, ClearedRows};
use crate::pieces::{template, Shape};
use crate::rng::PieceRandomizer;
use crate::scoring::Scoreboard;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Color, GameAction, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current orientation; starts as the catalog template.
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place a fresh template at its spawn anchor.
    pub fn spawn(kind: PieceKind) -> Self {
        let tpl = template(kind);
        Self {
            kind,
            shape: tpl.shape,
            x: tpl.spawn_x(),
            y: 0,
        }
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn fits(&self, board: &Board) -> bool {
        board.can_place(&self.shape, self.x, self.y)
    }
}

/// What a soft drop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Moved,
    /// The piece could not move and was locked; the next piece was spawned
    /// (or the game ended).
    Locked,
    /// Not running, or nothing to drop.
    Ignored,
}

/// Record of the most recent lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Removed row indices, bottom to top, in pre-clear coordinates.
    pub cleared_rows: ClearedRows,
    pub points: u32,
    pub level_before: u32,
    pub level_after: u32,
}

impl LockEvent {
    pub fn lines_cleared(&self) -> u32 {
        self.cleared_rows.len() as u32
    }

    pub fn leveled_up(&self) -> bool {
        self.level_after != self.level_before
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    randomizer: PieceRandomizer,
    scoreboard: Scoreboard,
    status: GameStatus,
    /// Last lock/line-clear event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// The game starts Running with no active piece; the first tick (or
    /// [`GameState::spawn_piece`]) brings one in.
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Start from a prepared board (puzzles, tests, benchmarks).
    pub fn with_board(seed: u32, board: Board) -> Self {
        Self {
            board,
            active: None,
            randomizer: PieceRandomizer::new(seed),
            scoreboard: Scoreboard::new(),
            status: GameStatus::Running,
            last_event: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn level(&self) -> u32 {
        self.scoreboard.level()
    }

    pub fn lines(&self) -> u32 {
        self.scoreboard.lines()
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Spawn a random piece.
    pub fn spawn_piece(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let kind = self.randomizer.next_kind();
        self.spawn_kind(kind)
    }

    /// Spawn a specific piece at its spawn anchor.
    ///
    /// If it does not fit there the game is over and no piece becomes active.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        if !self.is_running() {
            return false;
        }

        let piece = ActivePiece::spawn(kind);
        if !piece.fits(&self.board) {
            self.active = None;
            self.status = GameStatus::GameOver;
            info!(
                piece = kind.as_str(),
                score = self.score(),
                level = self.level(),
                lines = self.lines(),
                "game over"
            );
            return false;
        }

        debug!(piece = kind.as_str(), x = piece.x, y = piece.y, "spawned");
        self.active = Some(piece);
        true
    }

    /// Shift the active piece one column. Blocked moves are silently dropped.
    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.board.can_place(&active.shape, active.x + dx, active.y) {
            self.active = Some(ActivePiece {
                x: active.x + dx,
                ..active
            });
            return true;
        }
        false
    }

    /// Move down one row, or lock, clear, score and respawn when blocked.
    pub fn soft_drop(&mut self) -> DropOutcome {
        if !self.is_running() {
            return DropOutcome::Ignored;
        }
        let Some(active) = self.active else {
            return DropOutcome::Ignored;
        };

        if self.board.can_place(&active.shape, active.x, active.y + 1) {
            self.active = Some(ActivePiece {
                y: active.y + 1,
                ..active
            });
            return DropOutcome::Moved;
        }

        self.lock_piece();
        DropOutcome::Locked
    }

    /// Rotate the active piece clockwise in place. No kicks: if the rotated
    /// shape does not fit at the same anchor, nothing happens.
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated_cw();
        if self.board.can_place(&rotated, active.x, active.y) {
            self.active = Some(ActivePiece {
                shape: rotated,
                ..active
            });
            return true;
        }
        false
    }

    /// Lock the active piece onto the board and handle line clears
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock(&active.shape, active.kind, active.x, active.y);

        let cleared_rows = self.board.clear_full_rows();
        let level_before = self.level();
        let points = self.scoreboard.record_clear(cleared_rows.len() as u32);

        let event = LockEvent {
            kind: active.kind,
            x: active.x,
            y: active.y,
            cleared_rows,
            points,
            level_before,
            level_after: self.level(),
        };

        debug!(
            piece = active.kind.as_str(),
            x = active.x,
            y = active.y,
            lines = event.lines_cleared(),
            points,
            "locked"
        );
        if event.leveled_up() {
            info!(level = event.level_after, score = self.score(), "level up");
        }

        self.last_event = Some(event);
        self.spawn_piece();
    }

    /// Take and clear the last lock/line-clear event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Running <-> Paused. No effect once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => return false,
        };
        debug!(status = self.status.as_str(), "pause toggled");
        true
    }

    /// Discard the current game: empty board, score 0, level 1, Running, and
    /// no active piece until the next tick.
    ///
    /// The randomizer keeps its position, so consecutive games differ.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.scoreboard = Scoreboard::new();
        self.status = GameStatus::Running;
        self.last_event = None;
        info!("game reset");
    }

    /// One clock tick: spawn if nothing is falling, otherwise soft drop.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.active.is_none() {
            return self.spawn_piece();
        }
        self.soft_drop() != DropOutcome::Ignored
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.soft_drop() != DropOutcome::Ignored,
            GameAction::Rotate => self.rotate(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Fill `out` with the presentation view of the game.
    ///
    /// The active piece is overlaid on the board only while Running.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.to_grid();
        out.active = None;

        if self.is_running() {
            if let Some(active) = self.active {
                for (x, y) in active.cells() {
                    if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y)
                    {
                        out.board[y as usize][x as usize] = Some(active.kind);
                    }
                }
                out.active = Some(ActiveSnapshot::from(active));
            }
        }

        out.score = self.score();
        out.level = self.level();
        out.lines = self.lines();
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
