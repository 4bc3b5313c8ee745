//! Session creation and the process-wide session registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::engine::difficulty::Difficulty;
use crate::engine::error::{GameError, GameResult};
use crate::engine::session::GameSession;
use crate::engine::status::{GameStatus, Phase};
use crate::engine::words::WordSource;

/// Opaque identifier of a session in the registry.
pub type SessionId = String;

/// What leaves the engine for a caller: the status plus the game id, never the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub game_id: SessionId,
    pub masked: String,
    pub lives: u32,
    pub wrong: Vec<char>,
    pub won: bool,
    pub lost: bool,
}

impl GameView {
    pub fn new(game_id: impl Into<SessionId>, status: GameStatus) -> Self {
        Self {
            game_id: game_id.into(),
            masked: status.masked,
            lives: status.lives,
            wrong: status.wrong,
            won: status.won,
            lost: status.lost,
        }
    }

    pub fn phase(&self) -> Phase {
        Phase::from_flags(self.won, self.lost)
    }
}

/// Picks secrets and builds fresh sessions.
pub struct GameFactory {
    source: Box<dyn WordSource>,
    rng: Mutex<StdRng>,
}

impl GameFactory {
    /// Factory seeded from the operating system.
    pub fn new(source: impl WordSource + 'static) -> Self {
        Self::with_rng(source, StdRng::from_os_rng())
    }

    /// Factory with a reproducible sequence of secrets.
    pub fn seeded(source: impl WordSource + 'static, seed: u64) -> Self {
        Self::with_rng(source, StdRng::seed_from_u64(seed))
    }

    fn with_rng(source: impl WordSource + 'static, rng: StdRng) -> Self {
        Self {
            source: Box::new(source),
            rng: Mutex::new(rng),
        }
    }

    /// Starts a game on a secret drawn uniformly from the tier's word list.
    pub fn create_session(&self, difficulty: Difficulty) -> GameResult<GameSession> {
        let words = self.source.list_words(difficulty)?;
        let secret = words
            .choose(&mut *self.rng.lock())
            .ok_or(GameError::EmptyWordList { difficulty })?;
        GameSession::new(difficulty, secret)
    }
}

/// Owns every live session, keyed by id.
///
/// Each session sits behind its own lock, so guesses and restarts on one id
/// are applied one at a time while other ids proceed independently.
pub struct SessionRegistry {
    factory: GameFactory,
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<GameSession>>>>,
}

impl SessionRegistry {
    pub fn new(factory: GameFactory) -> Self {
        Self {
            factory,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Starts a new game under a freshly generated id.
    #[instrument(skip(self))]
    pub fn create(&self, difficulty: Difficulty) -> GameResult<GameView> {
        let session = self.factory.create_session(difficulty)?;
        Ok(self.insert(session))
    }

    /// Applies a guess to the game under `id`.
    #[instrument(skip(self))]
    pub fn guess(&self, id: &str, raw: &str) -> GameResult<GameView> {
        let session = self.lookup(id)?;
        let mut session = session.lock();
        let status = session.apply_guess(raw).inspect_err(|e| {
            warn!(error = %e, "guess rejected");
        })?;
        Ok(GameView::new(id, status))
    }

    /// Current view of the game under `id`.
    pub fn status(&self, id: &str) -> GameResult<GameView> {
        let session = self.lookup(id)?;
        let status = session.lock().status();
        Ok(GameView::new(id, status))
    }

    /// Replaces the game under `id` with a fresh one.
    ///
    /// An unknown id is not an error: a new game is started under a new id,
    /// on `difficulty` or normal. The returned view carries the id in use.
    #[instrument(skip(self))]
    pub fn restart(&self, id: &str, difficulty: Option<Difficulty>) -> GameResult<GameView> {
        let Some(existing) = self.lookup(id).ok() else {
            info!("restart of unknown game, starting a new one");
            return self.create(difficulty.unwrap_or_default());
        };

        let mut session = existing.lock();
        let difficulty = difficulty.unwrap_or(session.difficulty());
        *session = self.factory.create_session(difficulty)?;
        info!(%difficulty, "game restarted");
        Ok(GameView::new(id, session.status()))
    }

    fn insert(&self, session: GameSession) -> GameView {
        let id = Uuid::new_v4().simple().to_string();
        let view = GameView::new(id.clone(), session.status());
        info!(game_id = %id, difficulty = %session.difficulty(), "game created");
        self.sessions.write().insert(id, Arc::new(Mutex::new(session)));
        view
    }

    fn lookup(&self, id: &str) -> GameResult<Arc<Mutex<GameSession>>> {
        self.sessions
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| GameError::UnknownSession(id.to_string()))
    }
}
