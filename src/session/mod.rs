//! Game session storage.
//!
//! Sessions map a client-visible identifier to the [`Game`] being played.
//! Handlers only talk to the [`GameStore`] trait so the in-memory backend
//! can be swapped for a persistent one without touching the engine.
//!
//! # Architecture
//!
//! - [`GameStore`]: storage abstraction injected into the HTTP layer
//! - [`InMemoryGameStore`]: process-local store, no eviction or expiry
//! - [`SharedGame`]: handle to one game, guarded by its own mutex
//!
//! # Example
//!
//! ```rust
//! use hangman_server::game::Game;
//! use hangman_server::session::{GameStore, InMemoryGameStore, lock_game};
//!
//! let store = InMemoryGameStore::new();
//! store.insert("abc".to_string(), Game::new("cat", 6));
//!
//! let handle = store.get("abc").unwrap();
//! assert_eq!(lock_game(&handle).masked(), "_ _ _");
//! ```
//!
//! [`Game`]: crate::game::Game

mod store;

pub use store::{GameStore, InMemoryGameStore, SharedGame, lock_game};
