use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::quiz_submission::SubmittedAnswer;

static ORDINAL_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^O(\d+)$").expect("ORDINAL_CODE_REGEX is a valid regex pattern"));

/// Stored correct-answer encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectAnswer<'a> {
    /// Literal option text.
    Literal(&'a str),
    /// `O<n>`: the n-th option, 1-based. `O0` and overflowing codes carry 0 and
    /// never resolve.
    Ordinal(usize),
}

impl<'a> CorrectAnswer<'a> {
    pub fn parse(stored: &'a str) -> Self {
        match ORDINAL_CODE_REGEX.captures(stored) {
            Some(captures) => {
                let position = captures[1].parse::<usize>().unwrap_or(0);
                CorrectAnswer::Ordinal(position)
            }
            None => CorrectAnswer::Literal(stored),
        }
    }

    pub fn resolve(&self, options: &'a [String]) -> Option<&'a str> {
        match self {
            CorrectAnswer::Literal(text) => Some(*text),
            CorrectAnswer::Ordinal(position) => position
                .checked_sub(1)
                .and_then(|i| options.get(i))
                .map(String::as_str),
        }
    }
}

/// Trimmed, case-folded form used for comparison.
pub fn canonical_text(text: &str) -> String {
    text.trim().to_lowercase()
}

pub struct AnswerNormalizer;

impl AnswerNormalizer {
    /// Returns true when the submitted answer resolves to the same canonical
    /// text as the stored correct answer. Anything that cannot be resolved,
    /// including an empty canonical form, is a non-match.
    pub fn is_match(
        options: &[String],
        correct_answer: &str,
        submitted: Option<&SubmittedAnswer>,
    ) -> bool {
        let Some(submitted) = submitted else {
            return false;
        };

        let Some(correct_text) = CorrectAnswer::parse(correct_answer).resolve(options) else {
            return false;
        };
        let Some(submitted_text) = submitted.resolve(options) else {
            return false;
        };

        let expected = canonical_text(correct_text);
        !expected.is_empty() && expected == canonical_text(submitted_text)
    }
}
