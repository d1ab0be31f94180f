//! Session registry: creates games, routes moves to them, and closes them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};
use uuid::Uuid;

use rookery_core::{Board, Coordinate, Move, MoveList};

use crate::config::RegistryConfig;
use crate::error::SessionError;
use crate::game::Game;

/// Opaque session identifier (a random UUID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new_random() -> SessionId {
        SessionId(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<SessionId, SessionError> {
        Uuid::parse_str(s)
            .map(SessionId)
            .map_err(|_| SessionError::MalformedId { id: s.to_string() })
    }
}

type SessionMap = HashMap<SessionId, Arc<Mutex<Game>>>;

/// Open sessions keyed by id.
///
/// The map lock is held only long enough to find, insert, or remove an entry.
/// Each game sits behind its own mutex, so calls on different sessions run in
/// parallel and calls on the same session run one at a time.
pub struct Registry {
    sessions: RwLock<SessionMap>,
    config: RegistryConfig,
}

impl Registry {
    /// Create an empty registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Change the session cap. Sessions already open are kept.
    pub fn set_max_sessions(&mut self, max_sessions: usize) {
        self.config.max_sessions = max_sessions;
    }

    /// Choose whether [`play`](Self::play) also plays the reply it suggests.
    pub fn set_auto_apply_reply(&mut self, enabled: bool) {
        self.config.auto_apply_reply = enabled;
    }

    /// Open a session on the standard starting layout.
    pub fn create(&self) -> Result<SessionId, SessionError> {
        self.create_from(Board::starting_position())
    }

    /// Open a session on an arbitrary position.
    pub fn create_from(&self, board: Board) -> Result<SessionId, SessionError> {
        let mut sessions = self.write_sessions();
        if sessions.len() >= self.config.max_sessions {
            return Err(SessionError::SessionLimitReached {
                limit: self.config.max_sessions,
            });
        }
        let id = SessionId::new_random();
        sessions.insert(id, Arc::new(Mutex::new(Game::from_board(board))));
        info!(session = %id, open = sessions.len(), "session created");
        Ok(id)
    }

    /// Close a session, dropping its board.
    pub fn close(&self, id: SessionId) -> Result<(), SessionError> {
        let mut sessions = self.write_sessions();
        sessions.remove(&id).ok_or_else(|| not_found(id))?;
        info!(session = %id, open = sessions.len(), "session closed");
        Ok(())
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.read_sessions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Submit `mv` to a session and return the suggested reply.
    ///
    /// Moves are generated on the session's current board, `mv` is applied,
    /// and the reply is chosen from moves generated on the updated board. With
    /// [`RegistryConfig::auto_apply_reply`] set, the reply is applied as well.
    pub fn play(&self, id: SessionId, mv: Move) -> Result<Move, SessionError> {
        let game = self.game(id)?;
        let mut game = lock(&game, id)?;

        let reply = game.play(mv)?;
        if self.config.auto_apply_reply {
            game.submit(reply)?;
        }
        debug!(session = %id, %mv, %reply, auto = self.config.auto_apply_reply, "move played");
        Ok(reply)
    }

    /// Snapshot of a session's board.
    pub fn board(&self, id: SessionId) -> Result<Board, SessionError> {
        let game = self.game(id)?;
        let game = lock(&game, id)?;
        Ok(*game.board())
    }

    /// Moves available to the piece on `from` in a session.
    pub fn legal_moves(&self, id: SessionId, from: Coordinate) -> Result<MoveList, SessionError> {
        let game = self.game(id)?;
        let game = lock(&game, id)?;
        Ok(game.moves_from(from)?)
    }

    fn game(&self, id: SessionId) -> Result<Arc<Mutex<Game>>, SessionError> {
        self.read_sessions()
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    fn read_sessions(&self) -> RwLockReadGuard<'_, SessionMap> {
        // Map operations cannot panic midway, so a poisoned map is still consistent.
        self.sessions.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_sessions(&self) -> RwLockWriteGuard<'_, SessionMap> {
        self.sessions.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn lock(game: &Mutex<Game>, id: SessionId) -> Result<MutexGuard<'_, Game>, SessionError> {
    game.lock().map_err(|_| SessionError::Poisoned { id: id.to_string() })
}

fn not_found(id: SessionId) -> SessionError {
    SessionError::SessionNotFound { id: id.to_string() }
}
