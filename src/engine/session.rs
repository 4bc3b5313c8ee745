use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::engine::difficulty::Difficulty;
use crate::engine::error::{GameError, GameResult};
use crate::engine::status::{compute_status, GameStatus, Phase};

/// Lives lost on a wrong full-word guess.
pub const WORD_PENALTY: u32 = 2;

/// A validated guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Letter(char),
    Word(String),
}

impl Guess {
    /// Trims, lowercases and validates raw player input.
    ///
    /// Only ASCII letters count: `é` is an invalid letter, and a word
    /// containing one is an invalid word.
    pub fn parse(raw: &str) -> GameResult<Self> {
        let normalized = normalize_guess(raw);
        let mut chars = normalized.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(GameError::EmptyGuess),
            (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(Guess::Letter(letter)),
            (Some(letter), None) => Err(GameError::InvalidLetter(letter)),
            _ if normalized.chars().all(|c| c.is_ascii_alphabetic()) => Ok(Guess::Word(normalized)),
            _ => Err(GameError::InvalidWord(normalized)),
        }
    }
}

pub fn normalize_guess(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// One game: the secret, what has been guessed and what is left.
#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    secret: String,
    lives: u32,
    guessed: BTreeSet<char>,
}

impl GameSession {
    /// Starts a game on `secret` with the tier's full lives.
    ///
    /// The secret is trimmed and lowercased; anything but ASCII letters is rejected.
    pub fn new(difficulty: Difficulty, secret: &str) -> GameResult<Self> {
        let secret = normalize_guess(secret);
        if secret.is_empty() || !secret.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidSecret(secret));
        }
        Ok(Self {
            difficulty,
            secret,
            lives: difficulty.profile().lives,
            guessed: BTreeSet::new(),
        })
    }

    /// Overrides the starting lives.
    pub fn with_lives(mut self, lives: u32) -> Self {
        self.lives = lives;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn status(&self) -> GameStatus {
        compute_status(&self.secret, &self.guessed, self.lives)
    }

    pub fn phase(&self) -> Phase {
        self.status().phase()
    }

    /// Applies one guess and returns the resulting status.
    ///
    /// Guesses on a finished game and repeated letters change nothing.
    /// Rejected input leaves the session untouched.
    pub fn apply_guess(&mut self, raw: &str) -> GameResult<GameStatus> {
        if normalize_guess(raw).is_empty() {
            return Err(GameError::EmptyGuess);
        }
        if self.phase().is_over() {
            trace!("guess after game end ignored");
            return Ok(self.status());
        }

        match Guess::parse(raw)? {
            Guess::Letter(letter) => {
                if !self.guessed.insert(letter) {
                    trace!(%letter, "letter already guessed");
                } else if !self.secret.contains(letter) {
                    // Only reachable with lives >= 1; a finished game returned above.
                    self.lives -= 1;
                    debug!(%letter, lives = self.lives, "wrong letter");
                }
            }
            Guess::Word(word) => {
                if word == self.secret {
                    self.guessed.extend(self.secret.chars());
                    debug!("word guessed");
                } else {
                    self.lives = self.lives.saturating_sub(WORD_PENALTY);
                    debug!(lives = self.lives, "wrong word");
                }
            }
        }

        Ok(self.status())
    }
}
