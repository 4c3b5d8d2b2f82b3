//! Session store trait and the in-memory backend.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use crate::game::Game;

/// Handle to a single stored game.
///
/// Each game carries its own lock, so guesses against different sessions
/// never contend with each other.
pub type SharedGame = Arc<Mutex<Game>>;

/// Lock a game handle, recovering the guard if a previous holder panicked.
pub fn lock_game(game: &SharedGame) -> MutexGuard<'_, Game> {
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Storage for active games, keyed by session id.
pub trait GameStore: Send + Sync + Debug {
    /// Store `game` under `id`, replacing any game already there.
    fn insert(&self, id: String, game: Game) -> SharedGame;

    /// Look up the game for `id`.
    fn get(&self, id: &str) -> Option<SharedGame>;

    /// Remove the game for `id` unconditionally.
    fn remove(&self, id: &str) -> Option<SharedGame>;

    /// Remove `id` only if it still maps to `game`.
    ///
    /// Returns `true` when the entry was removed. A game that was replaced
    /// by a newer start under the same id is left alone.
    fn remove_if_current(&self, id: &str, game: &SharedGame) -> bool;

    /// Number of stored games.
    fn len(&self) -> usize;

    /// Whether the store holds no games.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local [`GameStore`].
///
/// Sessions live until they finish or are reset; there is no expiry sweep.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameStore {
    inner: Arc<InMemoryGameStoreInner>,
}

#[derive(Debug, Default)]
struct InMemoryGameStoreInner {
    games: RwLock<HashMap<String, SharedGame>>,
}

impl InMemoryGameStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for InMemoryGameStore {
    fn insert(&self, id: String, game: Game) -> SharedGame {
        let shared = Arc::new(Mutex::new(game));
        let mut guard = self
            .inner
            .games
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        guard.insert(id, Arc::clone(&shared));
        shared
    }

    fn get(&self, id: &str) -> Option<SharedGame> {
        let guard = self
            .inner
            .games
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        guard.get(id).cloned()
    }

    fn remove(&self, id: &str) -> Option<SharedGame> {
        let mut guard = self
            .inner
            .games
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        guard.remove(id)
    }

    fn remove_if_current(&self, id: &str, game: &SharedGame) -> bool {
        let mut guard = self
            .inner
            .games
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match guard.get(id) {
            Some(current) if Arc::ptr_eq(current, game) => {
                guard.remove(id);
                true
            }
            _ => false,
        }
    }

    fn len(&self) -> usize {
        self.inner
            .games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
