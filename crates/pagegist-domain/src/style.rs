//! Summary style selection

use std::fmt;
use std::str::FromStr;

/// Which prompt template the summarizer should use.
///
/// Unknown or missing style names fall back to [`SummaryStyle::Brief`].
/// That is an explicit policy, not an error: the caller always gets a
/// usable style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryStyle {
    /// Short summary, 50 words or less
    Brief,
    /// Longer summary, exactly 150 words
    Detailed,
    /// 5-7 key points as a bullet list
    Bullet,
    /// 3 multiple-choice questions with 4 options each
    Mcq,
}

impl SummaryStyle {
    /// All styles, in presentation order.
    pub const ALL: [SummaryStyle; 4] = [
        SummaryStyle::Brief,
        SummaryStyle::Detailed,
        SummaryStyle::Bullet,
        SummaryStyle::Mcq,
    ];

    /// Parse a style name, falling back to `Brief` for anything
    /// unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "brief" => SummaryStyle::Brief,
            "detailed" => SummaryStyle::Detailed,
            "bullet" | "bullets" => SummaryStyle::Bullet,
            "mcq" => SummaryStyle::Mcq,
            _ => SummaryStyle::Brief,
        }
    }

    /// Canonical lowercase name of the style.
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Brief => "brief",
            SummaryStyle::Detailed => "detailed",
            SummaryStyle::Bullet => "bullet",
            SummaryStyle::Mcq => "mcq",
        }
    }
}

impl Default for SummaryStyle {
    fn default() -> Self {
        SummaryStyle::Brief
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryStyle {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SummaryStyle::from_name(s))
    }
}
