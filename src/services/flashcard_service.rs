use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::FlashcardSet,
    repositories::FlashcardRepository,
};

pub struct FlashcardService {
    repository: Arc<dyn FlashcardRepository>,
}

impl FlashcardService {
    pub fn new(repository: Arc<dyn FlashcardRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self, owner_id: &str) -> AppResult<Vec<FlashcardSet>> {
        self.repository.list_by_owner(owner_id).await
    }

    pub async fn list_for_document(
        &self,
        owner_id: &str,
        document_id: &str,
    ) -> AppResult<Vec<FlashcardSet>> {
        self.repository.list_by_document(owner_id, document_id).await
    }

    pub async fn review_card(&self, owner_id: &str, card_id: &str) -> AppResult<FlashcardSet> {
        let mut set = self.find_set(owner_id, card_id).await?;
        set.card_mut(card_id)
            .ok_or_else(|| AppError::NotFound("Card not found in set".to_string()))?
            .mark_reviewed(Utc::now());

        self.repository.save(set).await
    }

    pub async fn toggle_star(&self, owner_id: &str, card_id: &str) -> AppResult<FlashcardSet> {
        let mut set = self.find_set(owner_id, card_id).await?;
        let starred = set
            .card_mut(card_id)
            .ok_or_else(|| AppError::NotFound("Card not found in set".to_string()))?
            .toggle_star();
        log::info!(
            "Flashcard {} {}",
            card_id,
            if starred { "starred" } else { "unstarred" }
        );

        self.repository.save(set).await
    }

    pub async fn delete_set(&self, owner_id: &str, set_id: &str) -> AppResult<()> {
        if !self.repository.delete(owner_id, set_id).await? {
            return Err(AppError::NotFound(format!(
                "Flashcard set with id '{}' not found",
                set_id
            )));
        }
        Ok(())
    }

    async fn find_set(&self, owner_id: &str, card_id: &str) -> AppResult<FlashcardSet> {
        self.repository
            .find_set_by_card(owner_id, card_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Flashcard set or card not found".to_string()))
    }
}
