//! Log setup.
//!
//! The terminal belongs to the game while it runs, so log lines go to a file
//! (plain text, no ANSI) or nowhere at all.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};

use crate::config::GameConfig;

/// Install the global subscriber. Returns `false` when logging is disabled.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(true)
}
