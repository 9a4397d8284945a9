//! Pagegist Domain Layer
//!
//! This crate contains the core domain model for Pagegist. It has ZERO
//! external dependencies and defines the fundamental value objects and
//! trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **SummaryStyle**: Which prompt template the summarizer should use
//! - **Credential**: An opaque API key, forwarded but never inspected
//! - **DomQuery**: Capability interface over a read-only document tree
//! - **CredentialProvider**: Capability interface for key resolution
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure domain types only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod credential;
pub mod style;
pub mod traits;

// Re-exports for convenience
pub use credential::Credential;
pub use style::SummaryStyle;
pub use traits::{CredentialProvider, DomQuery};
