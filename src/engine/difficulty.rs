use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::engine::error::{GameError, GameResult};

/// Difficulty tier of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Static configuration attached to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    pub min_len: usize,
    /// `None` means no upper bound.
    pub max_len: Option<usize>,
    pub lives: u32,
    /// File name of the backing word list.
    pub word_list: &'static str,
}

const EASY: DifficultyProfile = DifficultyProfile {
    min_len: 5,
    max_len: Some(6),
    lives: 10,
    word_list: "words_easy.txt",
};

const NORMAL: DifficultyProfile = DifficultyProfile {
    min_len: 6,
    max_len: Some(8),
    lives: 7,
    word_list: "words_normal.txt",
};

const HARD: DifficultyProfile = DifficultyProfile {
    min_len: 7,
    max_len: None,
    lives: 5,
    word_list: "words_hard.txt",
};

impl Difficulty {
    pub fn profile(self) -> &'static DifficultyProfile {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Normal => &NORMAL,
            Difficulty::Hard => &HARD,
        }
    }

    /// Parses a tier name coming from outside the crate.
    pub fn parse(raw: &str) -> GameResult<Self> {
        let name = raw.trim();
        name.parse()
            .map_err(|_| GameError::UnknownDifficulty(name.to_string()))
    }

    /// The tier after this one, wrapping from hard back to easy.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl DifficultyProfile {
    /// Whether a word's length lies within this tier's bounds.
    pub fn accepts_len(&self, len: usize) -> bool {
        len >= self.min_len && self.max_len.map_or(true, |max| len <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn profiles_are_well_formed() {
        for difficulty in Difficulty::iter() {
            let profile = difficulty.profile();
            assert!(profile.lives > 0, "{difficulty} has no lives");
            if let Some(max) = profile.max_len {
                assert!(profile.min_len <= max, "{difficulty} bounds inverted");
            }
        }
    }

    #[test]
    fn parse_accepts_known_names() {
        assert_eq!(Difficulty::parse("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::parse(" Normal ").unwrap(), Difficulty::Normal);
        assert_eq!(Difficulty::parse("HARD").unwrap(), Difficulty::Hard);
    }

    #[test]
    fn parse_rejects_unknown_tier() {
        let err = Difficulty::parse("nightmare").unwrap_err();
        assert!(matches!(err, GameError::UnknownDifficulty(ref name) if name == "nightmare"));
        assert_eq!(err.kind(), "configuration");
    }

    #[test]
    fn hard_has_no_upper_bound() {
        let hard = Difficulty::Hard.profile();
        assert!(!hard.accepts_len(6));
        assert!(hard.accepts_len(7));
        assert!(hard.accepts_len(42));
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::default(), Difficulty::Normal);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }
}
