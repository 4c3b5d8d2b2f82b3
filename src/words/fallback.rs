//! Primary-then-fallback word provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use super::{WordProvider, WordSourceError};

/// Asks `primary` first and falls back to `fallback` on any error.
///
/// Failures of the primary never reach the caller; they are logged and
/// swallowed. Only an error from the fallback itself is returned.
#[derive(Debug, Clone)]
pub struct FallbackWordProvider {
    primary: Arc<dyn WordProvider>,
    fallback: Arc<dyn WordProvider>,
}

impl FallbackWordProvider {
    #[must_use]
    pub fn new(primary: Arc<dyn WordProvider>, fallback: Arc<dyn WordProvider>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl WordProvider for FallbackWordProvider {
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        match self.primary.fetch_word().await {
            Ok(word) => Ok(word),
            Err(e) => {
                warn!(
                    name: "words.fallback",
                    error = %e,
                    "Primary word provider failed, using fallback list"
                );
                self.fallback.fetch_word().await
            }
        }
    }
}
