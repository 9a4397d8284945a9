//! The ordered extraction cascade
//!
//! Three strategies, tried strictly in order, each only when the
//! previous yielded insufficient text. Each strategy is a plain function
//! returning `Option<String>`; the engine stops at the first hit. The
//! ordering and per-strategy acceptance gates live here so they stay
//! independently testable and tunable.

use crate::config::ExtractorConfig;
use crate::text::{char_len, filter_boilerplate};
use pagegist_domain::DomQuery;
use tracing::debug;

/// Selectors commonly wrapping primary content, in decreasing
/// specificity. A generic `main` false positive (wrapping nav plus
/// content) is preferable to missing content entirely, but only after
/// the specific wrappers fail, so the generic entries come last.
pub(crate) const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main article",
    "[role=\"main\"]",
    ".mw-parser-output", // Wikipedia
    ".page-content",
    ".post-content",
    ".article-content",
    ".entry-content",
    ".story-body",
    ".article-body",
    ".content-wrapper",
    ".article-wrapper",
    "main",
    ".main-content",
];

pub(crate) type Strategy = fn(&dyn DomQuery, &ExtractorConfig) -> Option<String>;

/// The cascade, in execution order.
pub(crate) const CASCADE: &[(&str, Strategy)] = &[
    ("selector", from_selectors),
    ("paragraphs", from_paragraphs),
    ("filtered-body", from_filtered_body),
];

/// Run every strategy in order, returning the first acceptable text.
pub(crate) fn run_cascade(dom: &dyn DomQuery, config: &ExtractorConfig) -> Option<String> {
    for (name, strategy) in CASCADE {
        match strategy(dom, config) {
            Some(text) => {
                debug!("strategy '{}' accepted, {} chars", name, char_len(&text));
                return Some(text);
            }
            None => debug!("strategy '{}' yielded insufficient text", name),
        }
    }
    None
}

/// Strategy 1: first content selector whose element text exceeds the
/// primary threshold.
pub(crate) fn from_selectors(dom: &dyn DomQuery, config: &ExtractorConfig) -> Option<String> {
    for selector in CONTENT_SELECTORS {
        if let Some(text) = dom.first_text(selector) {
            if char_len(&text) > config.selector_min_chars {
                debug!("found text using selector: {}", selector);
                return Some(text);
            }
        }
    }
    None
}

/// Strategy 2: aggregate every paragraph- or list-item-level text above
/// the noise threshold. Blunt but reliable: nearly all content-bearing
/// pages use paragraph markup somewhere.
pub(crate) fn from_paragraphs(dom: &dyn DomQuery, config: &ExtractorConfig) -> Option<String> {
    let paragraphs: Vec<String> = dom
        .all_texts("p, li")
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| char_len(t) > config.paragraph_noise_chars)
        .collect();

    let joined = paragraphs.join("\n\n");
    if char_len(&joined) >= config.aggregate_min_chars {
        Some(joined)
    } else {
        None
    }
}

/// Strategy 3: whole body text, filtered line-by-line against the
/// boilerplate denylist. Last resort; any non-empty result is accepted
/// and left to the final minimum-length check.
pub(crate) fn from_filtered_body(dom: &dyn DomQuery, config: &ExtractorConfig) -> Option<String> {
    let filtered = filter_boilerplate(&dom.body_text(), config.line_min_chars);
    if filtered.trim().is_empty() {
        None
    } else {
        Some(filtered)
    }
}
