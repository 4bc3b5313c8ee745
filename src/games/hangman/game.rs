use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::core::game::{Flow, Game};
use crate::core::renderer::GameRenderer;
use crate::engine::{Difficulty, GameResult, GameView, Phase, SessionRegistry};
use crate::games::hangman::renderer::HangmanRenderer;

/// Terminal front end for one player, backed by the shared registry
pub struct HangmanGame {
    registry: Arc<SessionRegistry>,
    pub(crate) difficulty: Difficulty,
    pub(crate) view: GameView,
    pub(crate) input: String,
    pub(crate) message: String,
}

impl HangmanGame {
    pub fn new(registry: Arc<SessionRegistry>, difficulty: Difficulty) -> GameResult<Self> {
        let view = registry.create(difficulty)?;
        Ok(Self {
            registry,
            difficulty,
            view,
            input: String::new(),
            message: format!("New {difficulty} game. Guess a letter or the whole word."),
        })
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn phase(&self) -> Phase {
        self.view.phase()
    }

    fn submit(&mut self) {
        let guess = std::mem::take(&mut self.input);
        let before = self.view.lives;
        match self.registry.guess(&self.view.game_id, &guess) {
            Ok(view) => {
                self.message = match (view.won, view.lost) {
                    (true, _) => "You won!".to_string(),
                    (false, true) => "Out of lives.".to_string(),
                    _ if view.lives < before => format!("No luck with '{}'.", guess.trim()),
                    _ => format!("'{}' noted.", guess.trim()),
                };
                self.view = view;
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    fn restart(&mut self, difficulty: Difficulty) {
        match self.registry.restart(&self.view.game_id, Some(difficulty)) {
            Ok(view) => {
                self.difficulty = difficulty;
                self.view = view;
                self.input.clear();
                self.message = format!("New {difficulty} game.");
            }
            Err(e) => {
                warn!(error = %e, "restart failed");
                self.message = e.to_string();
            }
        }
    }
}

impl Game for HangmanGame {
    fn handle_input(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Flow::Quit,
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart(self.difficulty)
            }
            KeyCode::Tab => self.restart(self.difficulty.next()),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
        Flow::Continue
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        HangmanRenderer::render(frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GameFactory, StaticWordSource};

    fn game() -> HangmanGame {
        let source = StaticWordSource::new(["planet", "apple"]);
        let registry = Arc::new(SessionRegistry::new(GameFactory::seeded(source, 1)));
        HangmanGame::new(registry, Difficulty::Normal).unwrap()
    }

    fn press(game: &mut HangmanGame, code: KeyCode) -> Flow {
        game.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_line(game: &mut HangmanGame, line: &str) {
        for c in line.chars() {
            press(game, KeyCode::Char(c));
        }
        press(game, KeyCode::Enter);
    }

    #[test]
    fn typing_and_enter_submits_a_guess() {
        let mut game = game();
        type_line(&mut game, "q");
        assert_eq!(game.view().lives, 6);
        assert_eq!(game.view().wrong, vec!['q']);
        assert!(game.input.is_empty());
    }

    #[test]
    fn invalid_guess_shows_error() {
        let mut game = game();
        type_line(&mut game, "4");
        assert!(game.message.contains("invalid letter"));
        assert_eq!(game.view().lives, 7);
    }

    #[test]
    fn whole_word_wins() {
        let mut game = game();
        type_line(&mut game, "planet");
        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.message, "You won!");
    }

    #[test]
    fn tab_moves_to_next_difficulty() {
        let mut game = game();
        let id = game.view().game_id.clone();
        press(&mut game, KeyCode::Tab);
        // No word in the list is long enough for hard.
        assert_eq!(game.difficulty(), Difficulty::Normal);
        assert_eq!(game.view().game_id, id);
        assert!(game.message.contains("empty"));
    }

    #[test]
    fn ctrl_r_restarts_same_game_id() {
        let mut game = game();
        type_line(&mut game, "z");
        let id = game.view().game_id.clone();
        game.handle_input(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(game.view().game_id, id);
        assert_eq!(game.view().lives, 7);
        assert!(game.view().wrong.is_empty());
    }

    #[test]
    fn escape_quits() {
        let mut game = game();
        assert_eq!(press(&mut game, KeyCode::Esc), Flow::Quit);
        assert_eq!(press(&mut game, KeyCode::Char('a')), Flow::Continue);
    }
}
