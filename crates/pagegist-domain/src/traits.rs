//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Infrastructure implementations live in other crates.

use crate::Credential;

/// Read-only capability interface over a document tree.
///
/// The extraction cascade is written against this trait only, so it can
/// run over a real parsed HTML document (pagegist-extractor) or a mocked
/// tree in tests. Implementations must treat selector strings they cannot
/// parse as non-matches, never as errors: selector failures advance the
/// cascade, they do not abort it.
pub trait DomQuery {
    /// Rendered text of the first element matching `selector`, if any.
    ///
    /// Returns `None` for invalid selectors as well as for selectors
    /// that match nothing.
    fn first_text(&self, selector: &str) -> Option<String>;

    /// Rendered text of every element matching `selector`, in document
    /// order. Invalid selectors yield an empty list.
    fn all_texts(&self, selector: &str) -> Vec<String>;

    /// The full rendered text of the document body.
    fn body_text(&self) -> String;
}

/// Trait for resolving the stored API credential.
///
/// Implemented by the configuration layer (pagegist-cli). The core only
/// consumes the resolved value.
pub trait CredentialProvider {
    /// The credential, if one is configured.
    fn get(&self) -> Option<Credential>;
}
