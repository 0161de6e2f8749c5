use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::{Curriculum, FlashcardSet, Quiz, QuizSubmission},
};

pub const CURRICULA_COLLECTION: &str = "courses";
pub const QUIZZES_COLLECTION: &str = "quizzes";
pub const QUIZ_SUBMISSIONS_COLLECTION: &str = "quiz_submissions";
pub const FLASHCARD_SETS_COLLECTION: &str = "flashcard_sets";

/// Handle to the application database with one typed accessor per stored record.
#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_options(Self::client_options(config).await?)?;
        let database = Self {
            inner: client.database(&config.mongo_db_name),
        };

        database.ping().await?;
        log::info!("Connected to MongoDB database '{}'", config.mongo_db_name);

        Ok(database)
    }

    async fn client_options(config: &Config) -> AppResult<ClientOptions> {
        let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;
        options.app_name = Some("studyforge-server".to_string());
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        options.connect_timeout = Some(Duration::from_secs(5));
        options.server_selection_timeout = Some(Duration::from_secs(5));
        options.max_pool_size = Some(10);
        Ok(options)
    }

    pub fn curricula(&self) -> Collection<Curriculum> {
        self.inner.collection(CURRICULA_COLLECTION)
    }

    pub fn quizzes(&self) -> Collection<Quiz> {
        self.inner.collection(QUIZZES_COLLECTION)
    }

    pub fn quiz_submissions(&self) -> Collection<QuizSubmission> {
        self.inner.collection(QUIZ_SUBMISSIONS_COLLECTION)
    }

    pub fn flashcard_sets(&self) -> Collection<FlashcardSet> {
        self.inner.collection(FLASHCARD_SETS_COLLECTION)
    }

    /// Round-trip to the server. Used at startup and by `GET /health`.
    pub async fn ping(&self) -> AppResult<()> {
        self.inner.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
