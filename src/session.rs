use crate::error::GameError;
use crate::game::{Action, Game};
use dashmap::DashMap;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// How long a session may sit untouched before it is purged.
const SESSION_TIMEOUT: Duration = Duration::from_secs(3600);
/// How long a finished game is kept around for late viewers.
const FINISHED_TIMEOUT: Duration = Duration::from_secs(300);

/// Manages all the games currently being played.
#[derive(Default)]
pub struct SessionManager {
    sessions: DashMap<String, SessionHandle>,
    /// Fixed seed for every new session, if games should be reproducible.
    seed: Option<u64>,
}

/// A single game session.
#[derive(Debug)]
pub struct Session {
    /// The game itself.
    game: Game,
    /// Source of the blind draws for this game.
    rng: ChaCha8Rng,
    /// Timestamp of the last time this session was interacted with.
    last_ts: Instant,
}

pub type SessionHandle = Arc<Mutex<Session>>;

impl SessionManager {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            sessions: DashMap::new(),
            seed,
        }
    }

    /// Starts tracking a game that was set up elsewhere, replacing any game with the same ID.
    pub fn insert_game(&self, game: Game) -> Result<SessionHandle, GameError> {
        game.validate()?;
        let id = game.id().to_string();
        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
        let session = Arc::new(Mutex::new(Session::new(game, seed)));
        if self.sessions.insert(id.clone(), session.clone()).is_some() {
            log::warn!("Replaced existing game: {}", id);
        } else {
            log::info!("Tracking new game: {}", id);
        }
        Ok(session)
    }

    pub fn find_game(&self, game_id: &str) -> Result<SessionHandle, GameError> {
        self.sessions
            .get(game_id)
            .map(|session| session.clone())
            .ok_or(GameError::GameNotFound)
    }

    /// Stops tracking a game, returning its final state.
    pub fn remove_game(&self, game_id: &str) -> Option<Game> {
        let (_, session) = self.sessions.remove(game_id)?;
        let session = session.lock().ok()?;
        Some(session.game.clone())
    }

    pub fn num_games(&self) -> usize {
        self.sessions.len()
    }

    /// Resolves an action against the game it names, returning the updated game.
    pub fn resolve(&self, action: Action) -> Result<Game, GameError> {
        let game_id = action.game_id().to_string();
        let session = self.find_game(&game_id)?;
        let Ok(mut session) = session.lock() else {
            log::error!("Found poisoned session: {}", game_id);
            return Err(GameError::GameNotFound);
        };
        session.resolve(action)?;
        Ok(session.game.clone())
    }

    pub fn purge_games(&self) {
        self.purge_games_at(Instant::now());
    }

    fn purge_games_at(&self, now: Instant) {
        let mut ids_to_delete = vec![];

        // Find expired sessions
        for session in self.sessions.iter() {
            let game_id = session.key();
            let Ok(session) = session.lock() else {
                log::error!("Found poisoned session: {}", game_id);
                ids_to_delete.push(game_id.clone());
                continue;
            };
            let elapsed = now.saturating_duration_since(session.last_ts);
            let timeout = if session.game.game_over() {
                FINISHED_TIMEOUT
            } else {
                SESSION_TIMEOUT
            };
            if elapsed > timeout {
                ids_to_delete.push(game_id.clone());
            }
        }

        for game_id in ids_to_delete.into_iter() {
            log::info!("Purging game: {}", game_id);
            self.sessions.remove(&game_id);
        }
    }
}

impl Session {
    fn new(game: Game, seed: u64) -> Self {
        Self {
            game,
            rng: ChaCha8Rng::seed_from_u64(seed),
            last_ts: Instant::now(),
        }
    }

    /// Gets the game being played in this session.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Performs an action on the game.
    pub fn resolve(&mut self, action: Action) -> Result<(), GameError> {
        self.last_ts = Instant::now();
        let kind = action.to_string();
        if let Err(err) = self.game.resolve(action, &mut self.rng) {
            log::debug!("Rejected {} in game {}: {}", kind, self.game.id(), err);
            return Err(err);
        }
        Ok(())
    }
}
