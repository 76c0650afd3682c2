//! Game loop.
//!
//! One task owns the `GameState`. It waits on two sources, the drop clock and
//! a channel of input events, and handles whichever fires first to completion
//! before looking again. After every event the caller's frame callback gets a
//! fresh snapshot.
//!
//! The clock is an interval armed with the period for the current level. It
//! is torn down and re-armed only when the level changes. Whenever the clock
//! is (re)armed with nothing falling, a piece spawns right away.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::core::{DropClock, GameSnapshot, GameState};
use crate::input::{handle_key_event, should_quit};
use crate::types::{GameAction, GameStatus};

/// Something for the loop to handle besides the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    Action(GameAction),
    /// Draw again without changing state (terminal resize).
    Redraw,
    Quit,
}

pub struct GameLoop {
    game: GameState,
    clock: DropClock,
}

impl GameLoop {
    pub fn new(game: GameState) -> Self {
        let clock = DropClock::new(game.level());
        Self { game, clock }
    }

    /// Run until `Quit` arrives or every sender is dropped, then hand the
    /// final state back. An error from `on_frame` stops the loop.
    pub async fn run<F>(
        mut self,
        mut events: mpsc::Receiver<LoopEvent>,
        mut on_frame: F,
    ) -> Result<GameState>
    where
        F: FnMut(&GameSnapshot) -> Result<()>,
    {
        let mut status = self.game.status();
        if self.game.active().is_none() {
            self.game.spawn_piece();
        }

        let mut ticker = arm(self.clock.period());
        let mut snap = GameSnapshot::default();

        self.game.snapshot_into(&mut snap);
        note_status(&mut status, &snap)?;
        on_frame(&snap)?;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.game.tick();
                }
                event = events.recv() => match event {
                    Some(LoopEvent::Action(action)) => {
                        if !self.game.apply_action(action) {
                            debug!(action = action.as_str(), "action ignored");
                        }
                    }
                    Some(LoopEvent::Redraw) => {}
                    Some(LoopEvent::Quit) | None => break,
                },
            }

            if let Some(event) = self.game.take_last_event() {
                if event.lines_cleared() > 0 {
                    info!(
                        lines = event.lines_cleared(),
                        points = event.points,
                        score = self.game.score(),
                        "lines cleared"
                    );
                }
            }

            if let Some(period) = self.clock.rearm(self.game.level()) {
                info!(
                    level = self.clock.level(),
                    period_ms = self.clock.period_ms(),
                    "clock re-armed"
                );
                ticker = arm(period);
                if self.game.active().is_none() {
                    self.game.spawn_piece();
                }
            }

            self.game.snapshot_into(&mut snap);
            note_status(&mut status, &snap)?;
            on_frame(&snap)?;
        }

        Ok(self.game)
    }
}

/// Track status changes; a game that just ended logs its final snapshot.
fn note_status(last: &mut GameStatus, snap: &GameSnapshot) -> Result<()> {
    if snap.status == *last {
        return Ok(());
    }
    *last = snap.status;
    if snap.status == GameStatus::GameOver {
        info!(final_state = %serde_json::to_string(snap)?, "final snapshot");
    }
    Ok(())
}

/// Interval whose first tick is one full period away.
fn arm(period: Duration) -> Interval {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Forward terminal key presses into the loop from a blocking reader thread.
///
/// The thread ends after sending `Quit`, when the loop has gone away, or when
/// reading from the terminal fails.
pub fn spawn_terminal_input(tx: mpsc::Sender<LoopEvent>) -> JoinHandle<()> {
    thread::spawn(move || loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                warn!(error = %err, "terminal input failed");
                let _ = tx.blocking_send(LoopEvent::Quit);
                return;
            }
        };

        let msg = match event {
            Event::Key(key) if should_quit(key) => LoopEvent::Quit,
            Event::Key(key) => match handle_key_event(key) {
                Some(action) => LoopEvent::Action(action),
                None => continue,
            },
            Event::Resize(..) => LoopEvent::Redraw,
            _ => continue,
        };

        if tx.blocking_send(msg).is_err() || msg == LoopEvent::Quit {
            return;
        }
    })
}
