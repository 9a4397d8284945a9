//! Text cleanup: normalization, boilerplate filtering, truncation
//!
//! All lengths in this module are character counts, never byte counts.
//! The thresholds were tuned against pages measured in characters and
//! must not drift for multi-byte text.

/// Signal words marking recurring non-content lines. Matched as
/// case-insensitive substrings against each line of body text.
pub(crate) const BOILERPLATE_DENYLIST: &[&str] = &[
    "cookie",
    "sign in",
    "subscribe",
    "advertisement",
    "privacy",
    "terms",
    "contact",
    "more about",
];

/// Normalize extracted text.
///
/// Collapses runs of 2+ blank lines to exactly one blank line, tabs to
/// single spaces, runs of spaces to one space, and trims leading and
/// trailing whitespace. Blank lines containing only whitespace collapse
/// as well, which keeps the function idempotent:
/// `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut newlines = 0usize;
    let mut pending_space = false;

    for ch in input.chars() {
        let ch = if ch == '\t' { ' ' } else { ch };
        match ch {
            '\r' => {}
            '\n' => {
                newlines += 1;
                pending_space = false;
            }
            ' ' => pending_space = true,
            _ => {
                if !out.is_empty() {
                    if newlines >= 2 {
                        out.push_str("\n\n");
                    } else if newlines == 1 {
                        out.push('\n');
                    } else if pending_space {
                        out.push(' ');
                    }
                }
                newlines = 0;
                pending_space = false;
                out.push(ch);
            }
        }
    }

    out
}

/// Filter body text line-by-line, dropping short lines and lines that
/// contain a denylisted boilerplate term.
///
/// Lowest-precision, highest-recall cleanup, used only by the last
/// cascade strategy.
pub(crate) fn filter_boilerplate(text: &str, min_line_chars: usize) -> String {
    let kept: Vec<&str> = text
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            if char_len(trimmed) <= min_line_chars {
                return false;
            }
            let lower = trimmed.to_lowercase();
            !BOILERPLATE_DENYLIST.iter().any(|term| lower.contains(term))
        })
        .collect();
    kept.join("\n")
}

/// Length of `text` in characters.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncate `text` to at most `max_chars` characters, on a char boundary.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_blank_lines() {
        assert_eq!(normalize("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\nb"), "a\nb");
    }

    #[test]
    fn test_normalize_collapses_tabs_and_spaces() {
        assert_eq!(normalize("a\t\tb"), "a b");
        assert_eq!(normalize("a    b"), "a b");
        assert_eq!(normalize("a \t b"), "a b");
    }

    #[test]
    fn test_normalize_trims_ends() {
        assert_eq!(normalize("  \n\nhello\n\n  "), "hello");
    }

    #[test]
    fn test_normalize_whitespace_only_blank_lines() {
        assert_eq!(normalize("a\n \n \nb"), "a\n\nb");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "a\n\n\n\nb\t\tc    d",
            "  leading\nand trailing  \n\n\n",
            "plain text",
            "",
            "unicode\u{00e9}\n\n\n\ttext",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_filter_drops_denylisted_lines() {
        let body = "This website uses cookies to improve your experience\n\
                    The actual article content is right here in this line\n\
                    Subscribe now for unlimited access to all articles";
        let filtered = filter_boilerplate(body, 20);
        assert_eq!(
            filtered,
            "The actual article content is right here in this line"
        );
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let body = "PRIVACY policy applies to everything on this site\n\
                    A perfectly reasonable sentence about the subject matter";
        let filtered = filter_boilerplate(body, 20);
        assert!(!filtered.contains("PRIVACY"));
        assert!(filtered.contains("reasonable sentence"));
    }

    #[test]
    fn test_filter_drops_short_lines() {
        let body = "Home\nAbout\nA line that is comfortably longer than twenty characters";
        let filtered = filter_boilerplate(body, 20);
        assert_eq!(
            filtered,
            "A line that is comfortably longer than twenty characters"
        );
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(char_len(truncate_chars(&"x".repeat(9000), 8000)), 8000);
    }
}
