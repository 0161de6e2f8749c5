use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{Database, FLASHCARD_SETS_COLLECTION},
    errors::AppResult,
    models::domain::FlashcardSet,
};

#[async_trait]
pub trait FlashcardRepository: Send + Sync {
    async fn find_set_by_card(&self, owner_id: &str, card_id: &str) -> AppResult<Option<FlashcardSet>>;
    async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<FlashcardSet>>;
    async fn list_by_document(&self, owner_id: &str, document_id: &str) -> AppResult<Vec<FlashcardSet>>;
    async fn save(&self, set: FlashcardSet) -> AppResult<FlashcardSet>;
    /// Returns false when no set matched.
    async fn delete(&self, owner_id: &str, set_id: &str) -> AppResult<bool>;
}

pub struct MongoFlashcardRepository {
    collection: Collection<FlashcardSet>,
}

impl MongoFlashcardRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.flashcard_sets(),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for {} collection", FLASHCARD_SETS_COLLECTION);

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let card_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1, "cards.id": 1 })
            .options(IndexOptions::builder().name("owner_card".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(card_index).await?;

        log::info!(
            "Successfully created indexes for {} collection",
            FLASHCARD_SETS_COLLECTION
        );
        Ok(())
    }
}

#[async_trait]
impl FlashcardRepository for MongoFlashcardRepository {
    async fn find_set_by_card(&self, owner_id: &str, card_id: &str) -> AppResult<Option<FlashcardSet>> {
        let set = self
            .collection
            .find_one(doc! { "owner_id": owner_id, "cards.id": card_id })
            .await?;
        Ok(set)
    }

    async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<FlashcardSet>> {
        let sets = self
            .collection
            .find(doc! { "owner_id": owner_id })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(sets)
    }

    async fn list_by_document(&self, owner_id: &str, document_id: &str) -> AppResult<Vec<FlashcardSet>> {
        let sets = self
            .collection
            .find(doc! { "owner_id": owner_id, "document_id": document_id })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(sets)
    }

    async fn save(&self, set: FlashcardSet) -> AppResult<FlashcardSet> {
        self.collection
            .replace_one(doc! { "id": &set.id }, &set)
            .upsert(true)
            .await?;
        Ok(set)
    }

    async fn delete(&self, owner_id: &str, set_id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "id": set_id, "owner_id": owner_id })
            .await?;
        Ok(result.deleted_count > 0)
    }
}
