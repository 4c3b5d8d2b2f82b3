//! Secret word selection.
//!
//! A new game needs one word. The service first asks a remote random-word
//! API and, if that fails for any reason, picks from a fixed local list.
//!
//! # Providers
//!
//! - [`RemoteWordProvider`]: HTTP `GET` returning a JSON array of words
//! - [`LocalWordProvider`]: uniform choice from an in-process list
//! - [`FallbackWordProvider`]: tries a primary provider, then a fallback
//!
//! # Example
//!
//! ```rust
//! use hangman_server::words::LocalWordProvider;
//!
//! let provider = LocalWordProvider::new(["Cat"]).unwrap();
//! assert_eq!(provider.words(), ["cat"]);
//! ```

mod fallback;
mod local;
mod remote;

pub use fallback::FallbackWordProvider;
pub use local::{DEFAULT_WORDS, LocalWordProvider};
pub use remote::{DEFAULT_WORD_API_URL, RemoteWordProvider};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::WordsConfig;
use crate::game::is_letter;

/// Errors that can occur while obtaining a word.
#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    /// The request could not be sent, timed out, or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The word service answered with a non-success status.
    #[error("Word service returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not a non-empty JSON array of strings.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// A candidate word was empty or contained non-alphabetic characters.
    #[error("Invalid word: {0:?}")]
    InvalidWord(String),

    /// A local word list had nothing to choose from.
    #[error("Word list is empty")]
    EmptyWordList,
}

/// Source of secret words for new games.
#[async_trait]
pub trait WordProvider: Send + Sync + std::fmt::Debug {
    /// Produce one lowercase, purely alphabetic word.
    async fn fetch_word(&self) -> Result<String, WordSourceError>;
}

/// Lower-case and validate a candidate word.
pub fn normalize_word(raw: &str) -> Result<String, WordSourceError> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() || !word.chars().all(is_letter) {
        return Err(WordSourceError::InvalidWord(raw.to_string()));
    }
    Ok(word)
}

/// Build the word provider described by `config`.
///
/// The local list is always present; with the remote service enabled it
/// becomes the fallback behind [`RemoteWordProvider`].
pub fn build_provider(config: &WordsConfig) -> Result<Arc<dyn WordProvider>, WordSourceError> {
    let local: Arc<dyn WordProvider> = Arc::new(LocalWordProvider::new(&config.fallback)?);
    if !config.remote_enabled {
        return Ok(local);
    }

    let remote = Arc::new(RemoteWordProvider::new(
        config.api_url.clone(),
        Duration::from_millis(config.timeout_ms),
    )?);
    Ok(Arc::new(FallbackWordProvider::new(remote, local)))
}
