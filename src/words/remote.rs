//! Remote random-word service client.

use std::time::Duration;

use async_trait::async_trait;

use super::{WordProvider, WordSourceError, normalize_word};

/// Default random-word endpoint.
pub const DEFAULT_WORD_API_URL: &str = "https://random-word-api.herokuapp.com/word";

/// Fetches a word from an HTTP service answering `GET` with a JSON array.
///
/// Only the first element of the array is used. One request per call, no
/// retries; the client timeout bounds the whole exchange.
#[derive(Clone)]
pub struct RemoteWordProvider {
    http: reqwest::Client,
    url: String,
}

impl std::fmt::Debug for RemoteWordProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteWordProvider")
            .field("url", &self.url)
            .finish()
    }
}

impl RemoteWordProvider {
    /// Create a provider for `url` with a per-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, WordSourceError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }
}

#[async_trait]
impl WordProvider for RemoteWordProvider {
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        let resp = self.http.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WordSourceError::Status(status));
        }

        let value = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| {
                if e.is_decode() {
                    WordSourceError::Malformed(e.to_string())
                } else {
                    WordSourceError::Http(e)
                }
            })?;

        let first = value
            .as_array()
            .and_then(|words| words.first())
            .ok_or_else(|| WordSourceError::Malformed("expected a non-empty array".to_string()))?;

        let raw = first.as_str().ok_or_else(|| {
            WordSourceError::Malformed(format!("expected a string, got {first}"))
        })?;

        let word = normalize_word(raw)?;
        tracing::debug!(url = %self.url, word = %word, "Fetched remote word");
        Ok(word)
    }
}
