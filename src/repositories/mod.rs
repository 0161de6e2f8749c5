pub mod curriculum_repository;
pub mod flashcard_repository;
pub mod quiz_repository;
pub mod quiz_submission_repository;

pub use curriculum_repository::{CurriculumRepository, MongoCurriculumRepository};
pub use flashcard_repository::{FlashcardRepository, MongoFlashcardRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use quiz_submission_repository::{MongoQuizSubmissionRepository, QuizSubmissionRepository};
