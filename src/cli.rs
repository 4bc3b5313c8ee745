use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use strum::IntoEnumIterator;
use tokio::io::BufReader;

use crate::config::{Config, LogConfig, LogTarget, DEFAULT_LOG_LEVEL, DEFAULT_WORDS_DIR};
use crate::engine::{Difficulty, WordSource};
use crate::{games, logging, script};

#[derive(Parser)]
#[command(name = "hangman")]
#[command(about = "Guess the secret word, letter by letter, before you run out of lives")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Directory holding words_easy.txt, words_normal.txt and words_hard.txt
    #[arg(long, env = "HANGMAN_WORDS_DIR", default_value = DEFAULT_WORDS_DIR, global = true)]
    pub words_dir: PathBuf,

    /// Seed for reproducible secrets
    #[arg(long, env = "HANGMAN_SEED", global = true)]
    pub seed: Option<u64>,

    /// Log filter, e.g. "debug" or "hangman=trace"
    #[arg(long, env = "HANGMAN_LOG", default_value = DEFAULT_LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long, env = "HANGMAN_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play in the terminal
    Play {
        #[arg(short, long, default_value_t = Difficulty::Normal)]
        difficulty: Difficulty,
    },
    /// Serve JSON requests line by line over stdin/stdout
    Script,
    /// Print the candidate words for a difficulty (all of them if omitted)
    Words {
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },
}

impl Cli {
    pub fn config(&self) -> Config {
        let interactive = matches!(self.command, None | Some(Commands::Play { .. }));
        let target = match (&self.global.log_file, interactive) {
            (Some(path), _) => LogTarget::File(path.clone()),
            // Anything written to stderr would tear the terminal UI.
            (None, true) => LogTarget::Off,
            (None, false) => LogTarget::Stderr,
        };
        Config {
            words_dir: self.global.words_dir.clone(),
            seed: self.global.seed,
            log: LogConfig {
                level: self.global.log_level.clone(),
                target,
            },
        }
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    logging::init(&config.log)?;

    let command = cli.command.unwrap_or(Commands::Play { difficulty: Difficulty::default() });
    match command {
        Commands::Play { difficulty } => {
            games::play_hangman(Arc::new(config.registry()), difficulty).await?;
        }

        Commands::Script => {
            let registry = config.registry();
            let stdin = BufReader::new(tokio::io::stdin());
            script::serve(&registry, stdin, tokio::io::stdout()).await?;
        }

        Commands::Words { difficulty } => {
            let source = config.word_source();
            let tiers: Vec<Difficulty> = match difficulty {
                Some(difficulty) => vec![difficulty],
                None => Difficulty::iter().collect(),
            };
            for tier in tiers {
                let profile = tier.profile();
                let words = source.list_words(tier)?;
                let max = profile.max_len.map_or("∞".to_string(), |max| max.to_string());
                println!("📦 {tier} ({}-{max} letters, {} lives): {} words", profile.min_len, profile.lives, words.len());
                for word in words {
                    println!("   {word}");
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn play_defaults_to_silent_logging() {
        let cli = Cli::try_parse_from(["hangman", "play", "-d", "hard"]).unwrap();
        let config = cli.config();
        assert_eq!(config.log.target, LogTarget::Off);
        assert!(matches!(cli.command, Some(Commands::Play { difficulty: Difficulty::Hard })));
    }

    #[test]
    fn script_logs_to_stderr_or_file() {
        let cli = Cli::try_parse_from(["hangman", "script", "--seed", "3"]).unwrap();
        let config = cli.config();
        assert_eq!(config.log.target, LogTarget::Stderr);
        assert_eq!(config.seed, Some(3));

        let cli = Cli::try_parse_from(["hangman", "--log-file", "game.log", "script"]).unwrap();
        assert_eq!(cli.config().log.target, LogTarget::File(PathBuf::from("game.log")));
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        assert!(Cli::try_parse_from(["hangman", "play", "-d", "nightmare"]).is_err());
    }
}
