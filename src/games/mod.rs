pub mod hangman;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::core::engine::Engine;
use crate::engine::{Difficulty, SessionRegistry};
use self::hangman::HangmanGame;

/// Opens the terminal, plays hangman until the player quits, then restores the terminal.
pub async fn play_hangman(registry: Arc<SessionRegistry>, difficulty: Difficulty) -> Result<()> {
    // Fail before taking over the screen if no game can be started.
    let game = HangmanGame::new(registry, difficulty)?;

    let terminal = ratatui::init();
    let result = Engine::new(game).run(terminal).await;
    ratatui::restore();

    let game = result?;
    info!(game_id = %game.view().game_id, phase = ?game.phase(), "player left");
    Ok(())
}
