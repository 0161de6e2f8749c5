use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{Database, CURRICULA_COLLECTION},
    errors::AppResult,
    models::domain::Curriculum,
};

#[async_trait]
pub trait CurriculumRepository: Send + Sync {
    async fn create(&self, curriculum: Curriculum) -> AppResult<Curriculum>;
    /// Only returns the curriculum when it belongs to `owner_id`.
    async fn find_by_id(&self, owner_id: &str, id: &str) -> AppResult<Option<Curriculum>>;
    async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<Curriculum>>;
}

pub struct MongoCurriculumRepository {
    collection: Collection<Curriculum>,
}

impl MongoCurriculumRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.curricula(),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for {} collection", CURRICULA_COLLECTION);

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let owner_topic_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1, "topic": 1 })
            .options(
                IndexOptions::builder()
                    .name("owner_topic".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(owner_topic_index).await?;

        log::info!("Successfully created indexes for {} collection", CURRICULA_COLLECTION);
        Ok(())
    }
}

#[async_trait]
impl CurriculumRepository for MongoCurriculumRepository {
    async fn create(&self, curriculum: Curriculum) -> AppResult<Curriculum> {
        self.collection.insert_one(&curriculum).await?;
        Ok(curriculum)
    }

    async fn find_by_id(&self, owner_id: &str, id: &str) -> AppResult<Option<Curriculum>> {
        let curriculum = self
            .collection
            .find_one(doc! { "id": id, "owner_id": owner_id })
            .await?;
        Ok(curriculum)
    }

    async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<Curriculum>> {
        let curricula = self
            .collection
            .find(doc! { "owner_id": owner_id })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(curricula)
    }
}
