use serde::Serialize;

use crate::models::domain::{QuizResult, QuizSubmission, ScoreSummary};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Results page payload: per-question breakdown plus the recomputed score.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResultsResponse {
    pub quiz_id: String,
    pub quiz_title: String,
    pub submission_id: String,
    pub results: Vec<QuizResult>,
    pub score: ScoreSummary,
}

impl QuizResultsResponse {
    pub fn from_submission(quiz_title: &str, submission: QuizSubmission) -> Self {
        QuizResultsResponse {
            quiz_id: submission.quiz_id,
            quiz_title: quiz_title.to_string(),
            submission_id: submission.submission_id,
            results: submission.results,
            score: submission.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn results_response_carries_submission_fields() {
        let submission = QuizSubmission {
            quiz_id: "quiz-1".to_string(),
            submission_id: "sub-1".to_string(),
            owner_id: "user-1".to_string(),
            results: vec![],
            score: ScoreSummary::default(),
            completed_at: Utc::now(),
        };

        let response = QuizResultsResponse::from_submission("Geography", submission);
        assert_eq!(response.quiz_id, "quiz-1");
        assert_eq!(response.submission_id, "sub-1");
        assert_eq!(response.quiz_title, "Geography");
        assert_eq!(response.score.percentage, 0);
    }
}
