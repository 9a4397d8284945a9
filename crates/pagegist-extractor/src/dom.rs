//! Scraper-backed implementation of the `DomQuery` capability

use pagegist_domain::DomQuery;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// A parsed HTML document.
///
/// Wraps [`scraper::Html`] behind the [`DomQuery`] trait so the
/// extraction cascade never touches the parser directly.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse an HTML string into a queryable document.
    ///
    /// Parsing is lenient: malformed markup yields a best-effort tree,
    /// never an error.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

impl DomQuery for HtmlDocument {
    fn first_text(&self, selector: &str) -> Option<String> {
        let sel = match Selector::parse(selector) {
            Ok(sel) => sel,
            Err(e) => {
                // Recovered locally: an unparseable selector is a
                // non-match, the cascade moves on.
                debug!("selector '{}' failed to parse: {:?}", selector, e);
                return None;
            }
        };
        let element = self.html.select(&sel).next()?;
        Some(element_text(element))
    }

    fn all_texts(&self, selector: &str) -> Vec<String> {
        let sel = match Selector::parse(selector) {
            Ok(sel) => sel,
            Err(e) => {
                debug!("selector '{}' failed to parse: {:?}", selector, e);
                return Vec::new();
            }
        };
        self.html.select(&sel).map(element_text).collect()
    }

    fn body_text(&self) -> String {
        self.first_text("body")
            .unwrap_or_else(|| element_text(self.html.root_element()))
    }
}
