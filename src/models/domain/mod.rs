pub mod curriculum;
pub mod flashcard;
pub mod quiz;
pub mod quiz_question;
pub mod quiz_submission;
pub use curriculum::{Chapter, Curriculum, Difficulty};
pub use flashcard::{Flashcard, FlashcardSet};
pub use quiz::Quiz;
pub use quiz_question::QuizQuestion;
pub use quiz_submission::{QuizResult, QuizSubmission, ScoreSummary, SubmittedAnswer};
