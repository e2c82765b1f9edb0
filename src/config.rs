//! Runtime configuration loaded from the environment.
//!
//! A `.env` file in the working directory is honored (see `main`). Every
//! variable is optional; unparsable values fall back to the default.

use std::env;
use std::path::PathBuf;

use crate::core::GameConfig;

const DEFAULT_KEY_RELEASE_MS: u64 = 150;
const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Held-key timeout for terminals without release events
    pub key_release_ms: u64,
    /// Directory for the log file (the terminal is owned by the game)
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            key_release_ms: DEFAULT_KEY_RELEASE_MS,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl AppConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `PACMAN_PLAYER_SPEED` - pixels per frame
    /// - `PACMAN_START_DELAY_MS` - pause before a level starts
    /// - `PACMAN_COMPLETE_DELAY_MS` - level-complete flash duration
    /// - `PACMAN_FRAME_MS` - frame budget
    /// - `PACMAN_KEY_RELEASE_MS` - held-key timeout
    /// - `PACMAN_LOG_DIR` - log directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned());

        if let Some(speed) = read("PACMAN_PLAYER_SPEED").and_then(|v| v.parse::<f64>().ok()) {
            if speed.is_finite() && speed > 0.0 {
                config.game.player_speed = speed;
            }
        }
        if let Some(ms) = read_u64(&read, "PACMAN_START_DELAY_MS") {
            config.game.start_delay_ms = ms;
        }
        if let Some(ms) = read_u64(&read, "PACMAN_COMPLETE_DELAY_MS") {
            config.game.complete_delay_ms = ms;
        }
        if let Some(ms) = read_u64(&read, "PACMAN_FRAME_MS") {
            config.game.frame_budget_ms = ms.max(1);
        }
        if let Some(ms) = read_u64(&read, "PACMAN_KEY_RELEASE_MS") {
            config.key_release_ms = ms.max(1);
        }
        if let Some(dir) = read("PACMAN_LOG_DIR").filter(|v| !v.is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}

fn read_u64(read: impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    read(key)?.parse().ok()
}
