//! Startup configuration from environment variables.
//!
//! - `TETRIS_SEED`: RNG seed (u32). Defaults to a clock-derived value.
//! - `TETRIS_LOG_PATH`: append log output to this file. Logging is off when unset.
//! - `TETRIS_LOG_LEVEL`: `error|warn|info|debug|trace` (default `info`).
//!
//! Unparseable values fall back to their defaults.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let seed = get("TETRIS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = get("TETRIS_LOG_PATH").map(PathBuf::from);

        let log_level = get("TETRIS_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(Level::INFO);

        Self {
            seed,
            log_path,
            log_level,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_keys() {
        let config = GameConfig::from_lookup(lookup(&[
            ("TETRIS_SEED", "42"),
            ("TETRIS_LOG_PATH", "/tmp/artetris.log"),
            ("TETRIS_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/artetris.log")));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = GameConfig::from_lookup(lookup(&[]));
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = GameConfig::from_lookup(lookup(&[
            ("TETRIS_SEED", "-5"),
            ("TETRIS_LOG_PATH", "   "),
            ("TETRIS_LOG_LEVEL", "loud"),
        ]));
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_level, Level::INFO);
    }
}
