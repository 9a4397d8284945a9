//! Pagegist Extractor
//!
//! Isolates readable article text from a DOM tree of unknown structure.
//!
//! # Overview
//!
//! Web pages bury their primary content under navigation, cookie banners,
//! subscription prompts, and footers. The extractor runs an ordered
//! cascade of fallback strategies against a read-only document and
//! returns a bounded, cleaned plain-text string representing the page's
//! main content.
//!
//! # Architecture
//!
//! ```text
//! Document → selector cascade → paragraph aggregation → body filter
//!          → normalize → truncate → ExtractedText
//! ```
//!
//! Each strategy is attempted only when the previous one yielded
//! insufficient text. All document access goes through the
//! [`DomQuery`](pagegist_domain::DomQuery) capability trait, so the
//! cascade is testable against a mocked tree.
//!
//! # Example Usage
//!
//! ```
//! use pagegist_extractor::{ContentExtractor, ExtractorConfig, HtmlDocument};
//!
//! let html = r#"<html><body><article>
//!     <p>Long article text would live here...</p>
//! </article></body></html>"#;
//!
//! let dom = HtmlDocument::parse(html);
//! let extractor = ContentExtractor::new(ExtractorConfig::default());
//!
//! // Fails here: the sample is shorter than the minimum viable length.
//! assert!(extractor.extract(&dom).is_err());
//! ```

#![warn(missing_docs)]

mod config;
mod dom;
mod error;
mod extractor;
mod strategy;
mod text;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use dom::HtmlDocument;
pub use error::ExtractError;
pub use extractor::ContentExtractor;
pub use text::normalize;
