#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use studyforge_server::{
    app_state::Collaborators,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Curriculum, FlashcardSet, Quiz, QuizQuestion, QuizSubmission},
    repositories::{
        CurriculumRepository, FlashcardRepository, QuizRepository, QuizSubmissionRepository,
    },
    services::{
        content_generation_service::{GenerationRequest, TextGenerationBackend},
        video_enrichment_service::{VideoHit, VideoQuery, VideoSearchBackend},
    },
};

#[derive(Default)]
pub struct InMemoryCurriculumRepository {
    pub curricula: RwLock<HashMap<String, Curriculum>>,
}

#[async_trait]
impl CurriculumRepository for InMemoryCurriculumRepository {
    async fn create(&self, curriculum: Curriculum) -> AppResult<Curriculum> {
        let mut curricula = self.curricula.write().await;
        curricula.insert(curriculum.id.clone(), curriculum.clone());
        Ok(curriculum)
    }

    async fn find_by_id(&self, owner_id: &str, id: &str) -> AppResult<Option<Curriculum>> {
        let curricula = self.curricula.read().await;
        Ok(curricula.get(id).filter(|c| c.owner_id == owner_id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<Curriculum>> {
        let curricula = self.curricula.read().await;
        Ok(curricula
            .values()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryQuizRepository {
    pub quizzes: RwLock<HashMap<String, Quiz>>,
}

impl InMemoryQuizRepository {
    /// Quizzes are produced outside this service, so tests place them directly.
    pub async fn seed(&self, quiz: Quiz) {
        self.quizzes.write().await.insert(quiz.id.clone(), quiz);
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, owner_id: &str, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).filter(|q| q.owner_id == owner_id).cloned())
    }

    async fn list_by_document(&self, owner_id: &str, document_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes
            .values()
            .filter(|q| q.owner_id == owner_id && q.document_id.as_deref() == Some(document_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, owner_id: &str, id: &str) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        match quizzes.get(id) {
            Some(quiz) if quiz.owner_id == owner_id => Ok(quizzes.remove(id).is_some()),
            _ => Ok(false),
        }
    }
}

/// (owner_id, quiz_id, submission_id)
pub type SubmissionKey = (String, String, String);

pub fn submission_key(owner_id: &str, quiz_id: &str, submission_id: &str) -> SubmissionKey {
    (owner_id.to_string(), quiz_id.to_string(), submission_id.to_string())
}

#[derive(Default)]
pub struct InMemoryQuizSubmissionRepository {
    pub submissions: RwLock<HashMap<SubmissionKey, QuizSubmission>>,
    pub writes: AtomicUsize,
}

#[async_trait]
impl QuizSubmissionRepository for InMemoryQuizSubmissionRepository {
    async fn upsert(&self, submission: QuizSubmission) -> AppResult<QuizSubmission> {
        let key = submission_key(
            &submission.owner_id,
            &submission.quiz_id,
            &submission.submission_id,
        );
        self.submissions.write().await.insert(key, submission.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(submission)
    }

    async fn find(
        &self,
        owner_id: &str,
        quiz_id: &str,
        submission_id: &str,
    ) -> AppResult<Option<QuizSubmission>> {
        let key = submission_key(owner_id, quiz_id, submission_id);
        Ok(self.submissions.read().await.get(&key).cloned())
    }

    async fn delete_for_quiz(&self, owner_id: &str, quiz_id: &str) -> AppResult<u64> {
        let mut submissions = self.submissions.write().await;
        let before = submissions.len();
        submissions.retain(|(owner, quiz, _), _| !(owner == owner_id && quiz == quiz_id));
        Ok((before - submissions.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryFlashcardRepository {
    pub sets: RwLock<HashMap<String, FlashcardSet>>,
}

#[async_trait]
impl FlashcardRepository for InMemoryFlashcardRepository {
    async fn find_set_by_card(&self, owner_id: &str, card_id: &str) -> AppResult<Option<FlashcardSet>> {
        let sets = self.sets.read().await;
        Ok(sets
            .values()
            .find(|s| s.owner_id == owner_id && s.cards.iter().any(|c| c.id == card_id))
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<FlashcardSet>> {
        let sets = self.sets.read().await;
        Ok(sets
            .values()
            .filter(|s| s.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn list_by_document(&self, owner_id: &str, document_id: &str) -> AppResult<Vec<FlashcardSet>> {
        let sets = self.sets.read().await;
        Ok(sets
            .values()
            .filter(|s| s.owner_id == owner_id && s.document_id == document_id)
            .cloned()
            .collect())
    }

    async fn save(&self, set: FlashcardSet) -> AppResult<FlashcardSet> {
        self.sets.write().await.insert(set.id.clone(), set.clone());
        Ok(set)
    }

    async fn delete(&self, owner_id: &str, set_id: &str) -> AppResult<bool> {
        let mut sets = self.sets.write().await;
        match sets.get(set_id) {
            Some(set) if set.owner_id == owner_id => Ok(sets.remove(set_id).is_some()),
            _ => Ok(false),
        }
    }
}

/// Returns the same model text for every call and counts calls.
pub struct ScriptedTextBackend {
    response: String,
    delay: Option<Duration>,
    pub calls: AtomicUsize,
}

impl ScriptedTextBackend {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn slow(response: &str, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(response)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerationBackend for ScriptedTextBackend {
    async fn generate(&self, _request: GenerationRequest) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.response.clone())
    }
}

#[derive(Clone, Debug)]
pub enum VideoOutcome {
    Hit(&'static str),
    Empty,
    Fail,
    Hang,
    /// Answers with a hit after sleeping for the given milliseconds.
    Delay(u64, &'static str),
}

/// Answers each query by the chapter title it ends with. Unlisted titles get
/// no results.
#[derive(Default)]
pub struct ScriptedVideoBackend {
    outcomes: HashMap<String, VideoOutcome>,
    pub calls: AtomicUsize,
    /// Lookups that ran to completion.
    pub completed: AtomicUsize,
}

impl ScriptedVideoBackend {
    pub fn with(mut self, chapter_title: &str, outcome: VideoOutcome) -> Self {
        self.outcomes.insert(chapter_title.to_string(), outcome);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoSearchBackend for ScriptedVideoBackend {
    async fn search(&self, query: VideoQuery) -> AppResult<Vec<VideoHit>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self
            .outcomes
            .iter()
            .find(|(title, _)| query.text.ends_with(title.as_str()))
            .map(|(_, outcome)| outcome.clone())
            .unwrap_or(VideoOutcome::Empty);

        let hits = match outcome {
            VideoOutcome::Hit(id) => vec![VideoHit {
                video_id: id.to_string(),
            }],
            VideoOutcome::Empty => vec![],
            VideoOutcome::Fail => {
                return Err(AppError::UpstreamError("quotaExceeded".to_string()))
            }
            VideoOutcome::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                vec![]
            }
            VideoOutcome::Delay(millis, id) => {
                tokio::time::sleep(Duration::from_millis(millis)).await;
                vec![VideoHit {
                    video_id: id.to_string(),
                }]
            }
        };
        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(hits)
    }
}

pub fn outline(title: &str, chapter_titles: &[&str]) -> String {
    let chapters: Vec<_> = chapter_titles
        .iter()
        .map(|t| {
            serde_json::json!({
                "title": t,
                "description": format!("About {}", t),
                "estimatedTime": "1 hour"
            })
        })
        .collect();
    serde_json::json!({
        "title": title,
        "description": "Generated course",
        "chapters": chapters
    })
    .to_string()
}

pub fn question(id: &str, options: &[&str], correct: &str) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        question: format!("Question {}", id),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct.to_string(),
        explanation: None,
    }
}

/// Five questions: three ordinal, two literal.
pub fn five_question_quiz() -> Quiz {
    Quiz {
        id: "quiz-1".to_string(),
        owner_id: "user-1".to_string(),
        document_id: Some("doc-1".to_string()),
        title: "Rust basics".to_string(),
        questions: vec![
            question("q-1", &["let", "var", "const"], "O1"),
            question("q-2", &["Box", "Rc", "Arc"], "O3"),
            question("q-3", &["yes", "no"], "No"),
            question("q-4", &["u8", "i32", "f64"], "O2"),
            question("q-5", &["Ok", "Err"], "err"),
        ],
        created_at: None,
    }
}

pub fn test_config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "studyforge-test".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        generation_api_key: SecretString::from("test_generation_key".to_string()),
        generation_api_base: "http://127.0.0.1:9/v1".to_string(),
        generation_model: "test-model".to_string(),
        generation_temperature: 0.6,
        youtube_api_key: SecretString::from("test_youtube_key".to_string()),
        youtube_api_base: "http://127.0.0.1:9/youtube/v3".to_string(),
        curriculum_timeout_secs: 5,
        video_lookup_timeout_secs: 1,
    }
}

pub struct TestCollaborators {
    pub text: Arc<ScriptedTextBackend>,
    pub video: Arc<ScriptedVideoBackend>,
    pub curricula: Arc<InMemoryCurriculumRepository>,
    pub quizzes: Arc<InMemoryQuizRepository>,
    pub submissions: Arc<InMemoryQuizSubmissionRepository>,
    pub flashcards: Arc<InMemoryFlashcardRepository>,
}

impl TestCollaborators {
    pub fn new(text: ScriptedTextBackend, video: ScriptedVideoBackend) -> Self {
        Self {
            text: Arc::new(text),
            video: Arc::new(video),
            curricula: Arc::new(InMemoryCurriculumRepository::default()),
            quizzes: Arc::new(InMemoryQuizRepository::default()),
            submissions: Arc::new(InMemoryQuizSubmissionRepository::default()),
            flashcards: Arc::new(InMemoryFlashcardRepository::default()),
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            text_backend: self.text.clone(),
            video_backend: self.video.clone(),
            curricula: self.curricula.clone(),
            quizzes: self.quizzes.clone(),
            submissions: self.submissions.clone(),
            flashcards: self.flashcards.clone(),
        }
    }
}
