//! Transport-free hangman engine: word lists, game sessions and the registry that owns them.

pub mod difficulty;
pub mod error;
pub mod registry;
pub mod session;
pub mod status;
pub mod words;

pub use difficulty::{Difficulty, DifficultyProfile};
pub use error::{GameError, GameResult};
pub use registry::{GameFactory, GameView, SessionId, SessionRegistry};
pub use session::{normalize_guess, GameSession, Guess};
pub use status::{compute_status, GameStatus, Phase, PLACEHOLDER};
pub use words::{filter_words, DirectoryWordSource, StaticWordSource, WordSource};
