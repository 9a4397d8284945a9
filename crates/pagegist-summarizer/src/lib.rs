//! Pagegist Summarizer
//!
//! Turns extracted article text into a natural-language summary by
//! delegating to the Gemini `generateContent` API.
//!
//! # Architecture
//!
//! ```text
//! ExtractedText + SummaryStyle → prompt → Gemini → SummaryResult
//! ```
//!
//! Prompt construction and response parsing are pure functions; the
//! [`GeminiClient`] only moves bytes. Exactly one outbound request is
//! issued per invocation and there is no retry logic: a caller wanting
//! timeout or retry semantics wraps the call externally.
//!
//! # Example Usage
//!
//! ```no_run
//! use pagegist_domain::{Credential, SummaryStyle};
//! use pagegist_summarizer::GeminiClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new();
//! let key = Credential::new("AIza...");
//!
//! let summary = client
//!     .summarize("Extracted article text...", SummaryStyle::Brief, &key)
//!     .await?;
//!
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod gemini;
mod parser;
mod prompt;
mod wire;

pub use error::ApiError;
pub use gemini::{GeminiClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use parser::parse_response;
pub use prompt::build_prompt;
