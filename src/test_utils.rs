#[cfg(test)]
pub mod fixtures {
    use crate::models::{
        domain::{Difficulty, Flashcard, FlashcardSet, Quiz, QuizQuestion},
        dto::request::CurriculumRequest,
    };

    /// A three-question quiz mixing ordinal and literal correct answers
    pub fn geography_quiz() -> Quiz {
        Quiz {
            id: "quiz-geo".to_string(),
            owner_id: "user-1".to_string(),
            document_id: Some("doc-1".to_string()),
            title: "Geography".to_string(),
            questions: vec![
                QuizQuestion {
                    id: "q-1".to_string(),
                    question: "Capital of the UK?".to_string(),
                    options: vec!["Paris".to_string(), "London".to_string(), "Rome".to_string()],
                    correct_answer: "O2".to_string(),
                    explanation: None,
                },
                QuizQuestion {
                    id: "q-2".to_string(),
                    question: "Capital of Italy?".to_string(),
                    options: vec!["Madrid".to_string(), "Rome".to_string()],
                    correct_answer: "rome".to_string(),
                    explanation: Some("Rome has been the capital since 1871".to_string()),
                },
                QuizQuestion {
                    id: "q-3".to_string(),
                    question: "Capital of Spain?".to_string(),
                    options: vec!["Madrid".to_string(), "Lisbon".to_string()],
                    correct_answer: "O0".to_string(),
                    explanation: None,
                },
            ],
            created_at: None,
        }
    }

    pub fn curriculum_request(chapter_count: u32, include_videos: bool) -> CurriculumRequest {
        CurriculumRequest {
            topic: "Rust".to_string(),
            custom_content: String::new(),
            difficulty: Difficulty::Beginner,
            duration: "2 weeks".to_string(),
            chapter_count,
            include_videos,
        }
    }

    pub fn flashcard_set(owner_id: &str) -> FlashcardSet {
        let card = |id: &str, question: &str, answer: &str| Flashcard {
            id: id.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            review_count: 0,
            is_starred: false,
            last_reviewed: None,
        };

        FlashcardSet {
            id: "set-1".to_string(),
            owner_id: owner_id.to_string(),
            document_id: "doc-1".to_string(),
            cards: vec![
                card("card-1", "What does `&mut` grant?", "Exclusive mutable access"),
                card("card-2", "What is a lifetime?", "The scope a reference is valid for"),
            ],
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use validator::Validate;

    #[test]
    fn test_fixtures_geography_quiz() {
        let quiz = geography_quiz();
        assert_eq!(quiz.questions.len(), 3);
        assert_eq!(quiz.questions[0].correct_answer, "O2");
    }

    #[test]
    fn test_fixtures_curriculum_request_is_valid() {
        assert!(curriculum_request(20, true).validate().is_ok());
        assert!(curriculum_request(21, true).validate().is_err());
    }

    #[test]
    fn test_fixtures_flashcard_set() {
        let set = flashcard_set("user-1");
        assert_eq!(set.owner_id, "user-1");
        assert_eq!(set.cards.len(), 2);
    }
}
