use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        CurriculumRepository, FlashcardRepository, MongoCurriculumRepository,
        MongoFlashcardRepository, MongoQuizRepository, MongoQuizSubmissionRepository,
        QuizRepository, QuizSubmissionRepository,
    },
    services::{
        content_generation_service::{
            ContentGenerationService, OpenAiCompatibleBackend, TextGenerationBackend,
        },
        curriculum_service::CurriculumService,
        flashcard_service::FlashcardService,
        quiz_service::QuizService,
        quiz_submission_service::QuizSubmissionService,
        video_enrichment_service::{
            VideoEnrichmentService, VideoSearchBackend, YouTubeSearchBackend,
        },
    },
};

/// External collaborators the services are built from.
#[derive(Clone)]
pub struct Collaborators {
    pub text_backend: Arc<dyn TextGenerationBackend>,
    pub video_backend: Arc<dyn VideoSearchBackend>,
    pub curricula: Arc<dyn CurriculumRepository>,
    pub quizzes: Arc<dyn QuizRepository>,
    pub submissions: Arc<dyn QuizSubmissionRepository>,
    pub flashcards: Arc<dyn FlashcardRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub curriculum_service: Arc<CurriculumService>,
    pub quiz_service: Arc<QuizService>,
    pub quiz_submission_service: Arc<QuizSubmissionService>,
    pub flashcard_service: Arc<FlashcardService>,
    pub config: Arc<Config>,
    /// Present when backed by MongoDB; `None` for injected collaborators.
    pub database: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let curricula = Arc::new(MongoCurriculumRepository::new(&db));
        curricula.ensure_indexes().await?;
        let quizzes = Arc::new(MongoQuizRepository::new(&db));
        quizzes.ensure_indexes().await?;
        let submissions = Arc::new(MongoQuizSubmissionRepository::new(&db));
        submissions.ensure_indexes().await?;
        let flashcards = Arc::new(MongoFlashcardRepository::new(&db));
        flashcards.ensure_indexes().await?;

        let collaborators = Collaborators {
            text_backend: Arc::new(OpenAiCompatibleBackend::new(
                &config.generation_api_key,
                &config.generation_api_base,
                &config.generation_model,
            )),
            video_backend: Arc::new(YouTubeSearchBackend::new(
                config.youtube_api_key.clone(),
                &config.youtube_api_base,
            )),
            curricula,
            quizzes,
            submissions,
            flashcards,
        };

        Ok(Self {
            database: Some(db),
            ..Self::from_parts(config, collaborators)
        })
    }

    pub fn from_parts(config: Config, collaborators: Collaborators) -> Self {
        let content = ContentGenerationService::new(
            collaborators.text_backend,
            config.generation_temperature,
        );
        let videos = Arc::new(VideoEnrichmentService::new(
            collaborators.video_backend,
            Duration::from_secs(config.video_lookup_timeout_secs),
        ));
        let curriculum_service = Arc::new(CurriculumService::new(
            content,
            videos,
            collaborators.curricula,
            Duration::from_secs(config.curriculum_timeout_secs),
        ));
        let quiz_service = Arc::new(QuizService::new(
            Arc::clone(&collaborators.quizzes),
            Arc::clone(&collaborators.submissions),
        ));
        let quiz_submission_service = Arc::new(QuizSubmissionService::new(
            collaborators.quizzes,
            collaborators.submissions,
        ));
        let flashcard_service = Arc::new(FlashcardService::new(collaborators.flashcards));

        Self {
            curriculum_service,
            quiz_service,
            quiz_submission_service,
            flashcard_service,
            config: Arc::new(config),
            database: None,
        }
    }
}
