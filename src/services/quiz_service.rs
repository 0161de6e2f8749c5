use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
    repositories::{QuizRepository, QuizSubmissionRepository},
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    submissions: Arc<dyn QuizSubmissionRepository>,
}

impl QuizService {
    pub fn new(
        repository: Arc<dyn QuizRepository>,
        submissions: Arc<dyn QuizSubmissionRepository>,
    ) -> Self {
        Self {
            repository,
            submissions,
        }
    }

    pub async fn list_for_document(&self, owner_id: &str, document_id: &str) -> AppResult<Vec<Quiz>> {
        self.repository.list_by_document(owner_id, document_id).await
    }

    pub async fn get_quiz(&self, owner_id: &str, id: &str) -> AppResult<Quiz> {
        self.repository
            .find_by_id(owner_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    /// Deletes the quiz and the owner's graded submissions for it.
    pub async fn delete_quiz(&self, owner_id: &str, id: &str) -> AppResult<()> {
        if !self.repository.delete(owner_id, id).await? {
            return Err(AppError::NotFound(format!("Quiz with id '{}' not found", id)));
        }

        let removed = self.submissions.delete_for_quiz(owner_id, id).await?;
        log::info!("Deleted quiz {} and {} submissions", id, removed);
        Ok(())
    }
}
