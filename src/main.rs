//! Terminal Pac-Man runner (default binary).

use anyhow::Result;

use tui_pacman::core::{FramePacer, GameStateMachine, LevelData, SystemClock};
use tui_pacman::{logging, AppConfig, Harness, TerminalPlatform};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();
    let _guard = logging::init(&config.log_dir)?;

    let level = LevelData::classic()?;
    let machine = GameStateMachine::new(level, config.game);
    let pacer = FramePacer::new(config.game.frame_budget_ms);
    let platform = TerminalPlatform::new(config.key_release_ms);

    let mut harness = Harness::new(platform, SystemClock::new(), machine, pacer);
    let result = harness.initialize().and_then(|()| harness.run());

    // Always try to restore terminal state.
    let restored = harness.shutdown();
    let summary = result?;
    restored?;

    tracing::info!(frames = summary.frames, "exited cleanly");
    Ok(())
}
