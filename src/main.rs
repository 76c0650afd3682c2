//! Terminal ARTetris runner (default binary).
//!
//! Reads configuration from the environment, takes over the terminal, and runs
//! the game loop on a single-threaded runtime. The terminal is restored on the
//! way out whether the loop succeeded or not.

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

use artetris::core::GameState;
use artetris::input::KEY_HELP;
use artetris::runtime::spawn_terminal_input;
use artetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use artetris::{logging, GameConfig, GameLoop};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;
    info!(seed = config.seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config).await;

    // Always try to restore terminal state.
    let _ = term.exit();

    let game = result?;
    info!(
        score = game.score(),
        level = game.level(),
        lines = game.lines(),
        "exited"
    );
    Ok(())
}

async fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<GameState> {
    let (tx, rx) = mpsc::channel(64);
    spawn_terminal_input(tx);

    let view = GameView::default().with_help(&KEY_HELP);
    let mut fb = FrameBuffer::new(0, 0);

    GameLoop::new(GameState::new(config.seed))
        .run(rx, |snap| {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)
        })
        .await
}
