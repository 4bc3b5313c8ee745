use std::path::PathBuf;

use thiserror::Error;

use crate::engine::difficulty::Difficulty;

pub type GameResult<T> = Result<T, GameError>;

/// Everything a game operation can fail with.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown difficulty {0:?}: use easy, normal or hard")]
    UnknownDifficulty(String),

    #[error("word list unavailable: {}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list for {difficulty} is empty after filtering")]
    EmptyWordList { difficulty: Difficulty },

    #[error("empty guess")]
    EmptyGuess,

    #[error("invalid letter {0:?}: must be a single A-Z character")]
    InvalidLetter(char),

    #[error("invalid word {0:?}: only letters allowed")]
    InvalidWord(String),

    #[error("invalid secret {0:?}: must be a non-empty word of letters")]
    InvalidSecret(String),

    #[error("unknown game id {0:?}")]
    UnknownSession(String),
}

impl GameError {
    /// Stable tag used by the line protocol.
    pub fn kind(&self) -> &'static str {
        match self {
            GameError::UnknownDifficulty(_) => "configuration",
            GameError::SourceUnavailable { .. } => "source_unavailable",
            GameError::EmptyWordList { .. } => "empty_word_list",
            GameError::EmptyGuess => "empty_guess",
            GameError::InvalidLetter(_) => "invalid_letter",
            GameError::InvalidWord(_) => "invalid_word",
            GameError::InvalidSecret(_) => "invalid_secret",
            GameError::UnknownSession(_) => "unknown_session",
        }
    }

    /// True for malformed guesses, which never touch session state.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GameError::EmptyGuess | GameError::InvalidLetter(_) | GameError::InvalidWord(_)
        )
    }
}
