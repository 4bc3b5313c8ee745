//! Runtime configuration assembled from flags and environment.

use std::path::PathBuf;

use tracing::info;

use crate::engine::{DirectoryWordSource, GameFactory, SessionRegistry};

pub const DEFAULT_WORDS_DIR: &str = "words";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Discard everything, used while the terminal UI owns the screen.
    Off,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub target: LogTarget,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            target: LogTarget::Stderr,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub words_dir: PathBuf,
    /// Fixed seed for reproducible secrets.
    pub seed: Option<u64>,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_dir: PathBuf::from(DEFAULT_WORDS_DIR),
            seed: None,
            log: LogConfig::default(),
        }
    }
}

impl Config {
    pub fn word_source(&self) -> DirectoryWordSource {
        DirectoryWordSource::new(&self.words_dir)
    }

    /// Builds an empty registry reading words from `words_dir`.
    pub fn registry(&self) -> SessionRegistry {
        let source = self.word_source();
        info!(words_dir = %self.words_dir.display(), seeded = self.seed.is_some(), "building session registry");
        let factory = match self.seed {
            Some(seed) => GameFactory::seeded(source, seed),
            None => GameFactory::new(source),
        };
        SessionRegistry::new(factory)
    }
}
