use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::quiz_question::QuizQuestion;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub owner_id: String,
    pub document_id: Option<String>, // source document the quiz was generated from
    pub title: String,
    pub questions: Vec<QuizQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(owner_id: &str, title: &str, questions: Vec<QuizQuestion>) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            document_id: None,
            title: title.to_string(),
            questions,
            created_at: Some(Utc::now()),
        }
    }
}
