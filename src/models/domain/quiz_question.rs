use serde::{Deserialize, Serialize};

/// A multiple-choice question. `options` order is significant: positions are
/// what submitted indices and `O<n>` ordinal codes refer to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String, // literal option text or an ordinal code such as "O2"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    pub fn new(question: &str, options: &[&str], correct_answer: &str) -> Self {
        QuizQuestion {
            id: uuid::Uuid::new_v4().to_string(),
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.to_string(),
            explanation: None,
        }
    }
}
