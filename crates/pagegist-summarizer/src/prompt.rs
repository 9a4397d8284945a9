//! Prompt templates for summary generation
//!
//! One instruction per style, with the extracted text appended verbatim
//! at the end. Style fallback happens in `SummaryStyle::from_name`, so
//! every style value reaching this module has a template.

use pagegist_domain::SummaryStyle;

const BRIEF_INSTRUCTION: &str =
    "Summarize the following article in exactly 50 words or less:";

const DETAILED_INSTRUCTION: &str =
    "Summarize the following article in exactly 150 words:";

const BULLET_INSTRUCTION: &str =
    "Summarize the following article as bullet points (5-7 key points):";

const MCQ_INSTRUCTION: &str = "Based on the following article, create 3 multiple choice questions with 4 options each. Format as \"Q1) Question?\nA) Option 1\nB) Option 2\nC) Option 3\nD) Option 4\n\nCorrect Answer: A\"";

/// Build the full prompt for the given text and style.
pub fn build_prompt(text: &str, style: SummaryStyle) -> String {
    let instruction = match style {
        SummaryStyle::Brief => BRIEF_INSTRUCTION,
        SummaryStyle::Detailed => DETAILED_INSTRUCTION,
        SummaryStyle::Bullet => BULLET_INSTRUCTION,
        SummaryStyle::Mcq => MCQ_INSTRUCTION,
    };
    format!("{}\n\n{}", instruction, text)
}
