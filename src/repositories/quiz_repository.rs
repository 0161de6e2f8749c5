use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{Database, QUIZZES_COLLECTION},
    errors::AppResult,
    models::domain::Quiz,
};

/// Quizzes are always looked up within one owner's records.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, owner_id: &str, id: &str) -> AppResult<Option<Quiz>>;
    async fn list_by_document(&self, owner_id: &str, document_id: &str) -> AppResult<Vec<Quiz>>;
    /// Returns false when no quiz matched.
    async fn delete(&self, owner_id: &str, id: &str) -> AppResult<bool>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.quizzes(),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for {} collection", QUIZZES_COLLECTION);

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let owner_document_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1, "document_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("owner_document".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(owner_document_index).await?;

        log::info!("Successfully created indexes for {} collection", QUIZZES_COLLECTION);
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn find_by_id(&self, owner_id: &str, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self
            .collection
            .find_one(doc! { "id": id, "owner_id": owner_id })
            .await?;
        Ok(quiz)
    }

    async fn list_by_document(&self, owner_id: &str, document_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self
            .collection
            .find(doc! { "owner_id": owner_id, "document_id": document_id })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(quizzes)
    }

    async fn delete(&self, owner_id: &str, id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "id": id, "owner_id": owner_id })
            .await?;
        Ok(result.deleted_count > 0)
    }
}
