use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Quiz, QuizResult, QuizSubmission, SubmittedAnswer},
        dto::{request::SubmitQuizRequest, response::QuizResultsResponse},
    },
    repositories::{QuizRepository, QuizSubmissionRepository},
    services::scoring_service::ScoringService,
};

pub struct QuizSubmissionService {
    quiz_repository: Arc<dyn QuizRepository>,
    submission_repository: Arc<dyn QuizSubmissionRepository>,
}

impl QuizSubmissionService {
    pub fn new(
        quiz_repository: Arc<dyn QuizRepository>,
        submission_repository: Arc<dyn QuizSubmissionRepository>,
    ) -> Self {
        Self {
            quiz_repository,
            submission_repository,
        }
    }

    /// Grade every question of the quiz in its stored order. Answers for
    /// unknown questions are ignored; when a question is answered twice the
    /// last answer wins.
    pub fn grade(quiz: &Quiz, answers: Vec<(String, SubmittedAnswer)>) -> Vec<QuizResult> {
        let mut by_question: HashMap<String, SubmittedAnswer> = HashMap::new();
        for (question_id, answer) in answers {
            if quiz.questions.iter().any(|q| q.id == question_id) {
                by_question.insert(question_id, answer);
            } else {
                log::warn!(
                    "Ignoring answer for unknown question {} on quiz {}",
                    question_id,
                    quiz.id
                );
            }
        }

        quiz.questions
            .iter()
            .map(|question| ScoringService::grade_question(question, by_question.remove(&question.id)))
            .collect()
    }

    /// Grade and store a submission. Calling again with the same submission id
    /// overwrites the stored record with identical results.
    pub async fn submit(
        &self,
        quiz_id: &str,
        owner_id: &str,
        request: SubmitQuizRequest,
    ) -> AppResult<QuizSubmission> {
        request.validate()?;

        let quiz = self.get_quiz(owner_id, quiz_id).await?;
        let submission_id = request
            .submission_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let answers = request
            .answers
            .into_iter()
            .map(|a| (a.question_id, a.selected_answer))
            .collect();
        let results = Self::grade(&quiz, answers);
        let score = ScoringService::score(&results);

        let submission = QuizSubmission {
            quiz_id: quiz.id.clone(),
            submission_id,
            owner_id: owner_id.to_string(),
            results,
            score,
            completed_at: Utc::now(),
        };

        let stored = self.submission_repository.upsert(submission).await?;
        log::info!(
            "Graded submission {} for quiz {}: {}/{} ({}%)",
            stored.submission_id,
            stored.quiz_id,
            stored.score.correct_count,
            stored.score.total_questions,
            stored.score.percentage
        );
        Ok(stored)
    }

    /// Load stored results, recompute them and write them back.
    pub async fn get_results(
        &self,
        owner_id: &str,
        quiz_id: &str,
        submission_id: &str,
    ) -> AppResult<QuizResultsResponse> {
        let quiz = self.get_quiz(owner_id, quiz_id).await?;
        let submission = self.rescore(owner_id, quiz_id, submission_id).await?;

        Ok(QuizResultsResponse::from_submission(&quiz.title, submission))
    }

    /// Regrade the stored per-question results and overwrite the summary.
    /// Another owner's submission is reported as not found.
    pub async fn rescore(
        &self,
        owner_id: &str,
        quiz_id: &str,
        submission_id: &str,
    ) -> AppResult<QuizSubmission> {
        let mut submission = self
            .submission_repository
            .find(owner_id, quiz_id, submission_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Submission '{}' for quiz '{}' not found",
                    submission_id, quiz_id
                ))
            })?;

        ScoringService::regrade(&mut submission.results);
        let score = ScoringService::score(&submission.results);
        if score != submission.score {
            log::info!(
                "Score for submission {} changed from {}% to {}%",
                submission_id,
                submission.score.percentage,
                score.percentage
            );
        }
        submission.score = score;

        self.submission_repository.upsert(submission).await
    }

    async fn get_quiz(&self, owner_id: &str, quiz_id: &str) -> AppResult<Quiz> {
        self.quiz_repository
            .find_by_id(owner_id, quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::QuizQuestion;

    fn question(id: &str, options: &[&str], correct: &str) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            question: format!("Question {}", id),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.to_string(),
            explanation: None,
        }
    }

    fn quiz() -> Quiz {
        Quiz {
            id: "quiz-1".to_string(),
            owner_id: "user-1".to_string(),
            document_id: None,
            title: "Geography".to_string(),
            questions: vec![
                question("q-1", &["Paris", "London", "Rome"], "O2"),
                question("q-2", &["A", "B"], " b "),
                question("q-3", &["Yes", "No"], "Yes"),
            ],
            created_at: None,
        }
    }

    #[test]
    fn grade_follows_quiz_order_not_submission_order() {
        let results = QuizSubmissionService::grade(
            &quiz(),
            vec![
                ("q-3".to_string(), SubmittedAnswer::Index(0)),
                ("q-1".to_string(), SubmittedAnswer::Index(1)),
            ],
        );

        let ids: Vec<_> = results.iter().map(|r| r.question_id.as_str()).collect();
        assert_eq!(ids, vec!["q-1", "q-2", "q-3"]);
        assert!(results[0].is_correct);
        assert!(!results[1].answered);
        assert!(!results[1].is_correct);
        assert!(results[2].is_correct);
    }

    #[test]
    fn grade_ignores_unknown_questions_and_keeps_last_duplicate() {
        let results = QuizSubmissionService::grade(
            &quiz(),
            vec![
                ("q-2".to_string(), SubmittedAnswer::Text("A".to_string())),
                ("q-2".to_string(), SubmittedAnswer::Text("B".to_string())),
                ("ghost".to_string(), SubmittedAnswer::Index(0)),
            ],
        );

        assert_eq!(results.len(), 3);
        assert_eq!(
            results[1].selected_answer,
            Some(SubmittedAnswer::Text("B".to_string()))
        );
        assert!(results[1].is_correct);
    }

    #[test]
    fn malformed_ordinal_question_counts_as_incorrect() {
        let quiz = crate::test_utils::fixtures::geography_quiz();
        let results = QuizSubmissionService::grade(
            &quiz,
            vec![
                ("q-1".to_string(), SubmittedAnswer::Index(1)),
                ("q-2".to_string(), SubmittedAnswer::Text(" Rome".to_string())),
                ("q-3".to_string(), SubmittedAnswer::Index(0)),
            ],
        );

        let summary = ScoringService::score(&results);
        assert_eq!(summary.correct_count, 2);
        assert_eq!(summary.incorrect_count, 1);
        assert_eq!(summary.percentage, 67);
        assert!(results[2].answered);
        assert!(!results[2].is_correct);
    }

    #[test]
    fn grade_keeps_stored_and_submitted_forms() {
        let results = QuizSubmissionService::grade(
            &quiz(),
            vec![("q-1".to_string(), SubmittedAnswer::Index(1))],
        );

        assert_eq!(results[0].correct_answer, "O2");
        assert_eq!(results[0].selected_answer, Some(SubmittedAnswer::Index(1)));
    }
}
