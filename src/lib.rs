pub mod core {
	pub mod engine;
	pub mod game;
	pub mod renderer;
}

pub mod cli;
pub mod config;
pub mod engine;
pub mod games;
pub mod logging;
pub mod script;

// Re-export for convenience
pub use crate::core::game::{Flow, Game};
pub use crate::engine::{Difficulty, GameError, GameView, SessionRegistry};
