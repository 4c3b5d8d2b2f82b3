//! Hangman over HTTP
//!
//! A single-player word-guessing game exposed as a small JSON API. A client
//! starts a session, receives a masked word and guesses one letter at a time
//! until the word is revealed or the turn budget runs out.
//!
//! # Architecture
//!
//! - **Server**: Axum router with `/start`, `/guess`, `/reset` and the `/game` page
//! - **Game Engine**: pure state machine over word, guesses and turns
//! - **Session Store**: injectable map from session id to game
//! - **Word Source**: remote random-word API with a local fallback list
//!
//! # Modules
//!
//! - [`api`]: JSON request/response bodies
//! - [`config`]: layered CLI/env/file configuration
//! - [`game`]: masking, guess validation and win/loss rules
//! - [`server`]: router, middleware and handlers
//! - [`session`]: game storage
//! - [`words`]: secret word providers

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod api;
pub mod config;
pub mod game;
pub mod server;
pub mod session;
pub mod words;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::session::{GameStore, InMemoryGameStore};
use crate::words::{WordProvider, WordSourceError};

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Game storage, keyed by session id.
    pub sessions: Arc<dyn GameStore>,
    /// Source of secret words for new games.
    pub words: Arc<dyn WordProvider>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        sessions: Arc<dyn GameStore>,
        words: Arc<dyn WordProvider>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            sessions,
            words,
            config,
        }
    }

    /// State with an empty in-memory store and the configured word providers.
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self, WordSourceError> {
        let words = words::build_provider(&config.words)?;
        Ok(Self::new(
            Arc::new(InMemoryGameStore::new()),
            words,
            config,
        ))
    }
}
