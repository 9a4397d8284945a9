//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur during content extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No strategy produced enough text to be worth summarizing
    #[error("insufficient content: found {0} chars (minimum: {1})")]
    InsufficientContent(usize, usize),
}
