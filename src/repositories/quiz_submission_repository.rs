use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{Database, QUIZ_SUBMISSIONS_COLLECTION},
    errors::AppResult,
    models::domain::QuizSubmission,
};

/// Submissions are keyed by (owner_id, quiz_id, submission_id). Two owners
/// reusing a submission id get two independent records.
#[async_trait]
pub trait QuizSubmissionRepository: Send + Sync {
    /// Insert or replace the record for its key. Concurrent writers for the
    /// same key resolve last-writer-wins.
    async fn upsert(&self, submission: QuizSubmission) -> AppResult<QuizSubmission>;
    async fn find(
        &self,
        owner_id: &str,
        quiz_id: &str,
        submission_id: &str,
    ) -> AppResult<Option<QuizSubmission>>;
    /// Removes every submission the owner made for a quiz; returns the count.
    async fn delete_for_quiz(&self, owner_id: &str, quiz_id: &str) -> AppResult<u64>;
}

pub struct MongoQuizSubmissionRepository {
    collection: Collection<QuizSubmission>,
}

impl MongoQuizSubmissionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.quiz_submissions(),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for {} collection", QUIZ_SUBMISSIONS_COLLECTION);

        let submission_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1, "quiz_id": 1, "submission_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("owner_quiz_submission_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(submission_index).await?;

        log::info!(
            "Successfully created indexes for {} collection",
            QUIZ_SUBMISSIONS_COLLECTION
        );
        Ok(())
    }
}

#[async_trait]
impl QuizSubmissionRepository for MongoQuizSubmissionRepository {
    async fn upsert(&self, submission: QuizSubmission) -> AppResult<QuizSubmission> {
        self.collection
            .replace_one(
                doc! {
                    "owner_id": &submission.owner_id,
                    "quiz_id": &submission.quiz_id,
                    "submission_id": &submission.submission_id
                },
                &submission,
            )
            .upsert(true)
            .await?;
        Ok(submission)
    }

    async fn find(
        &self,
        owner_id: &str,
        quiz_id: &str,
        submission_id: &str,
    ) -> AppResult<Option<QuizSubmission>> {
        let submission = self
            .collection
            .find_one(doc! {
                "owner_id": owner_id,
                "quiz_id": quiz_id,
                "submission_id": submission_id
            })
            .await?;
        Ok(submission)
    }

    async fn delete_for_quiz(&self, owner_id: &str, quiz_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { "owner_id": owner_id, "quiz_id": quiz_id })
            .await?;
        Ok(result.deleted_count)
    }
}
