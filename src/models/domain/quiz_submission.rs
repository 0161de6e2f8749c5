use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted answer as it arrived: either a position in the question's
/// option list or the literal text of the chosen option.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SubmittedAnswer {
    Index(i64),
    Text(String),
}

impl SubmittedAnswer {
    /// Resolves the answer to option text. Out-of-range indices resolve to `None`.
    pub fn resolve<'a>(&'a self, options: &'a [String]) -> Option<&'a str> {
        match self {
            SubmittedAnswer::Index(index) => usize::try_from(*index)
                .ok()
                .and_then(|i| options.get(i))
                .map(String::as_str),
            SubmittedAnswer::Text(text) => Some(text.as_str()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResult {
    pub question_id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String, // as stored on the question
    pub selected_answer: Option<SubmittedAnswer>, // as submitted, None when skipped
    pub answered: bool,
    pub is_correct: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreSummary {
    pub total_questions: u32,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub percentage: u8,
}

/// Graded results for one attempt at a quiz. Keyed by (owner_id, quiz_id, submission_id);
/// regrading overwrites the stored record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSubmission {
    pub quiz_id: String,
    pub submission_id: String,
    pub owner_id: String,
    pub results: Vec<QuizResult>,
    pub score: ScoreSummary,
    pub completed_at: DateTime<Utc>,
}
