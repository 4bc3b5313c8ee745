use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Shown in place of a letter that has not been guessed yet.
pub const PLACEHOLDER: char = '_';

/// Outcome of a game, derived from its state on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    InProgress,
    Won,
    Lost,
}

impl Phase {
    /// Collapses the two flags into one phase; a win outranks a loss.
    pub fn from_flags(won: bool, lost: bool) -> Self {
        if won {
            Phase::Won
        } else if lost {
            Phase::Lost
        } else {
            Phase::InProgress
        }
    }

    pub fn is_over(self) -> bool {
        self != Phase::InProgress
    }
}

/// Projection of a session that is safe to hand to a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub masked: String,
    pub wrong: Vec<char>,
    pub lives: u32,
    pub won: bool,
    pub lost: bool,
}

impl GameStatus {
    pub fn phase(&self) -> Phase {
        Phase::from_flags(self.won, self.lost)
    }
}

/// Builds the status of a game without touching it.
///
/// `won` and `lost` are computed independently, so both can be set at once.
pub fn compute_status(secret: &str, guessed: &BTreeSet<char>, lives: u32) -> GameStatus {
    GameStatus {
        masked: mask(secret, guessed),
        wrong: guessed.iter().copied().filter(|c| !secret.contains(*c)).collect(),
        lives,
        won: secret.chars().all(|c| guessed.contains(&c)),
        lost: lives == 0,
    }
}

fn mask(secret: &str, guessed: &BTreeSet<char>) -> String {
    let mut masked = String::with_capacity(secret.len() * 2);
    for (i, c) in secret.chars().enumerate() {
        if i > 0 {
            masked.push(' ');
        }
        masked.push(if guessed.contains(&c) { c } else { PLACEHOLDER });
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(letters: &str) -> BTreeSet<char> {
        letters.chars().collect()
    }

    #[test]
    fn masks_unguessed_positions() {
        let status = compute_status("apple", &set("ae"), 5);
        assert_eq!(status.masked, "a _ _ _ e");
        assert_eq!(compute_status("banana", &set("bn"), 5).masked, "b _ n _ n _");
        assert_eq!(compute_status("test", &set(""), 5).masked, "_ _ _ _");
    }

    #[test]
    fn wrong_letters_are_sorted() {
        let status = compute_status("banana", &set("zbxna"), 4);
        assert_eq!(status.wrong, vec!['x', 'z']);
    }

    #[test]
    fn win_requires_every_distinct_letter() {
        assert!(compute_status("cat", &set("cat"), 3).won);
        assert!(!compute_status("banana", &set("bn"), 3).won);
        assert!(compute_status("banana", &set("abn"), 3).won);
        assert_eq!(compute_status("cat", &set("cat"), 3).masked, "c a t");
    }

    #[test]
    fn loss_is_zero_lives() {
        let status = compute_status("cat", &set(""), 0);
        assert!(status.lost);
        assert_eq!(status.phase(), Phase::Lost);
    }

    #[test]
    fn win_outranks_loss_in_phase() {
        let status = compute_status("cat", &set("cat"), 0);
        assert!(status.won && status.lost);
        assert_eq!(status.phase(), Phase::Won);
    }

    #[test]
    fn phase_from_flags() {
        assert_eq!(Phase::from_flags(false, false), Phase::InProgress);
        assert_eq!(Phase::from_flags(false, true), Phase::Lost);
        assert_eq!(Phase::from_flags(true, false), Phase::Won);
        assert_eq!(Phase::from_flags(true, true), Phase::Won);
    }
}
