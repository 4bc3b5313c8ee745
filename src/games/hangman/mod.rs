/// Hangman terminal game
pub mod game;
pub mod renderer;

pub use game::HangmanGame;
pub use renderer::HangmanRenderer;
