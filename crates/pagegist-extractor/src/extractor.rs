//! Core ContentExtractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::strategy::run_cascade;
use crate::text::{char_len, normalize, truncate_chars};
use pagegist_domain::DomQuery;
use tracing::info;

/// Extracts the primary content text from a document.
///
/// Pure function of document state: read-only access, no network, no
/// storage. Each call is independent and stateless.
pub struct ContentExtractor {
    config: ExtractorConfig,
}

impl ContentExtractor {
    /// Create an extractor with the given thresholds.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Run the extraction cascade against a document.
    ///
    /// Returns the normalized, truncated primary-content text. The
    /// result is always between `min_viable_chars` and `max_chars`
    /// characters long.
    ///
    /// # Errors
    ///
    /// [`ExtractError::InsufficientContent`] when no strategy produced
    /// text of viable length. Terminal for this attempt; there is no
    /// automatic retry.
    pub fn extract(&self, dom: &dyn DomQuery) -> Result<String, ExtractError> {
        let raw = run_cascade(dom, &self.config).unwrap_or_default();

        let cleaned = normalize(&raw);
        let bounded = truncate_chars(&cleaned, self.config.max_chars);

        let len = char_len(bounded);
        info!("extracted {} characters", len);

        if len < self.config.min_viable_chars {
            return Err(ExtractError::InsufficientContent(
                len,
                self.config.min_viable_chars,
            ));
        }

        Ok(bounded.to_string())
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}
