//! In-process word list.

use async_trait::async_trait;
use rand::seq::SliceRandom;

use super::{WordProvider, WordSourceError, normalize_word};

/// Words used when no other list is configured.
pub const DEFAULT_WORDS: [&str; 10] = [
    "python",
    "fastapi",
    "hangman",
    "testing",
    "server",
    "frontend",
    "backend",
    "session",
    "response",
    "deployment",
];

/// Picks a word uniformly at random from a fixed list.
#[derive(Debug, Clone)]
pub struct LocalWordProvider {
    words: Vec<String>,
}

impl LocalWordProvider {
    /// Build a provider from a word list.
    ///
    /// Every word is lower-cased; the list must be non-empty and every entry
    /// purely alphabetic.
    pub fn new<I, S>(words: I) -> Result<Self, WordSourceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize_word(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(WordSourceError::EmptyWordList);
        }

        Ok(Self { words })
    }

    /// The normalized word list.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for LocalWordProvider {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(ToString::to_string).collect(),
        }
    }
}

#[async_trait]
impl WordProvider for LocalWordProvider {
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        self.words
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(WordSourceError::EmptyWordList)
    }
}
