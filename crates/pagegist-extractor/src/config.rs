//! Configuration for the extractor
//!
//! Every threshold in the cascade is an empirically chosen constant, not
//! a derived one. Page structures vary and future tuning is expected, so
//! they live here as named fields rather than literals in the strategy
//! code.

use serde::{Deserialize, Serialize};

/// Text an accepted selector match must exceed (characters)
pub const DEFAULT_SELECTOR_MIN_CHARS: usize = 200;

/// Total paragraph text required to accept the aggregation fallback
pub const DEFAULT_AGGREGATE_MIN_CHARS: usize = 200;

/// Paragraphs at or below this trimmed length are treated as noise
pub const DEFAULT_PARAGRAPH_NOISE_CHARS: usize = 10;

/// Body-filter lines at or below this trimmed length are dropped
pub const DEFAULT_LINE_MIN_CHARS: usize = 20;

/// Shortest final text worth summarizing (characters)
pub const DEFAULT_MIN_VIABLE_CHARS: usize = 100;

/// Hard cap on the output, protects downstream request size and cost
pub const DEFAULT_MAX_CHARS: usize = 8000;

/// Configuration for the extraction cascade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// A selector match is accepted when its text exceeds this length
    pub selector_min_chars: usize,

    /// Paragraph aggregation is accepted at or above this total length
    pub aggregate_min_chars: usize,

    /// Paragraphs/list items must exceed this trimmed length to count
    pub paragraph_noise_chars: usize,

    /// Body-filter lines must exceed this trimmed length to survive
    pub line_min_chars: usize,

    /// Final text below this length fails the extraction
    pub min_viable_chars: usize,

    /// Final text is truncated to this many characters
    pub max_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            selector_min_chars: DEFAULT_SELECTOR_MIN_CHARS,
            aggregate_min_chars: DEFAULT_AGGREGATE_MIN_CHARS,
            paragraph_noise_chars: DEFAULT_PARAGRAPH_NOISE_CHARS,
            line_min_chars: DEFAULT_LINE_MIN_CHARS,
            min_viable_chars: DEFAULT_MIN_VIABLE_CHARS,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chars == 0 {
            return Err("max_chars must be greater than 0".to_string());
        }
        if self.min_viable_chars > self.max_chars {
            return Err("min_viable_chars cannot exceed max_chars".to_string());
        }
        if self.selector_min_chars > self.max_chars {
            return Err("selector_min_chars cannot exceed max_chars".to_string());
        }
        if self.aggregate_min_chars > self.max_chars {
            return Err("aggregate_min_chars cannot exceed max_chars".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
