//! Candidate secret words, filtered per difficulty tier.
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::engine::difficulty::{Difficulty, DifficultyProfile};
use crate::engine::error::{GameError, GameResult};

/// Supplies the candidate words for a tier.
///
/// Implementations return lowercase alphabetic words within the tier's length
/// bounds, deduplicated with the first occurrence kept.
pub trait WordSource: Send + Sync {
    fn list_words(&self, difficulty: Difficulty) -> GameResult<Vec<String>>;

    /// Same as [`WordSource::list_words`] for a tier name that still needs validating.
    fn list_words_named(&self, tier: &str) -> GameResult<Vec<String>> {
        self.list_words(Difficulty::parse(tier)?)
    }
}

/// Applies the word-list rules to raw lines.
///
/// Lines are trimmed and lowercased; blank lines, lines with anything other
/// than ASCII letters, and words outside the length bounds are dropped.
pub fn filter_words<I, S>(lines: I, profile: &DifficultyProfile) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    lines
        .into_iter()
        .filter_map(|line| {
            let word = line.as_ref().trim().to_ascii_lowercase();
            let alphabetic = !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic());
            (alphabetic && profile.accepts_len(word.len())).then_some(word)
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Reads one UTF-8 list per tier from a directory.
#[derive(Debug, Clone)]
pub struct DirectoryWordSource {
    root: PathBuf,
}

impl DirectoryWordSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, difficulty: Difficulty) -> PathBuf {
        self.root.join(difficulty.profile().word_list)
    }
}

impl WordSource for DirectoryWordSource {
    fn list_words(&self, difficulty: Difficulty) -> GameResult<Vec<String>> {
        let path = self.path_for(difficulty);
        let text = fs::read_to_string(&path)
            .map_err(|source| GameError::SourceUnavailable { path: path.clone(), source })?;
        let words = filter_words(text.lines(), difficulty.profile());
        debug!(path = %path.display(), %difficulty, count = words.len(), "loaded word list");
        Ok(words)
    }
}

/// Fixed in-memory word list shared by every tier.
#[derive(Debug, Clone, Default)]
pub struct StaticWordSource {
    words: Vec<String>,
}

impl StaticWordSource {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { words: words.into_iter().map(Into::into).collect() }
    }
}

impl WordSource for StaticWordSource {
    fn list_words(&self, difficulty: Difficulty) -> GameResult<Vec<String>> {
        Ok(filter_words(&self.words, difficulty.profile()))
    }
}
