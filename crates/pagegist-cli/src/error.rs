//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Page fetch error
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// No API key configured anywhere
    #[error("No API key configured. Run 'pagegist key set <key>' or set GEMINI_API_KEY.")]
    MissingCredential,

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extract(#[from] pagegist_extractor::ExtractError),

    /// Summarizer error
    #[error("API error: {0}")]
    Api(#[from] pagegist_summarizer::ApiError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
