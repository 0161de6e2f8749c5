use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy, JsonSchema)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Chapter {
    pub title: String,
    pub description: String,
    pub estimated_time: String,
    pub video_id: Option<String>, // external video reference, None when not enriched
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CourseProgress {
    pub completed_chapters: Vec<u32>,
    pub percentage: u8,
}

/// A generated course. Built once per generation call and stored as a whole;
/// regenerating produces a new record rather than editing chapters in place.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Curriculum {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub topic: String,
    pub custom_content: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub include_videos: bool,
    pub chapters: Vec<Chapter>,
    pub progress: CourseProgress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request metadata copied onto the stored record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurriculumMetadata {
    pub topic: String,
    pub custom_content: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub include_videos: bool,
}

impl Curriculum {
    /// Assembles a curriculum, refusing an empty chapter list.
    pub fn assemble(
        owner_id: &str,
        title: String,
        description: String,
        metadata: CurriculumMetadata,
        chapters: Vec<Chapter>,
    ) -> AppResult<Self> {
        if chapters.is_empty() {
            return Err(AppError::GenerationStructure(
                "Course must have at least one chapter".to_string(),
            ));
        }

        Ok(Curriculum {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            title,
            description,
            topic: metadata.topic,
            custom_content: metadata.custom_content,
            difficulty: metadata.difficulty,
            duration: metadata.duration,
            include_videos: metadata.include_videos,
            chapters,
            progress: CourseProgress::default(),
            created_at: Some(Utc::now()),
        })
    }
}
