use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub review_count: u32,
    pub is_starred: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlashcardSet {
    pub id: String,
    pub owner_id: String,
    pub document_id: String,
    pub cards: Vec<Flashcard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl FlashcardSet {
    pub fn card_mut(&mut self, card_id: &str) -> Option<&mut Flashcard> {
        self.cards.iter_mut().find(|c| c.id == card_id)
    }
}

impl Flashcard {
    pub fn mark_reviewed(&mut self, at: DateTime<Utc>) {
        self.last_reviewed = Some(at);
        self.review_count += 1;
    }

    pub fn toggle_star(&mut self) -> bool {
        self.is_starred = !self.is_starred;
        self.is_starred
    }
}
