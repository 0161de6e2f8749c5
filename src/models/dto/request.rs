use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;
use crate::models::domain::curriculum::{CurriculumMetadata, Difficulty};
use crate::models::domain::quiz_submission::SubmittedAnswer;

pub const MAX_CHAPTER_COUNT: u32 = 20;

/// Body of `POST /api/courses/generate`. Every field is optional on the wire so
/// that a missing field surfaces as a validation error instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateCourseRequestDto {
    #[validate(required, length(min = 1, max = 200))]
    pub topic: Option<String>,

    #[serde(default)]
    #[validate(length(max = 5000))]
    pub custom_content: Option<String>,

    #[validate(required)]
    pub difficulty: Option<Difficulty>,

    #[validate(required, length(min = 1, max = 100))]
    pub duration: Option<String>,

    #[validate(required, range(min = 1, max = 20))]
    pub chapter_count: Option<u32>,

    #[serde(default)]
    pub include_videos: bool,
}

/// A validated request to build a curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CurriculumRequest {
    #[validate(length(min = 1))]
    pub topic: String,
    pub custom_content: String,
    pub difficulty: Difficulty,
    #[validate(length(min = 1))]
    pub duration: String,
    #[validate(range(min = 1, max = 20))]
    pub chapter_count: u32,
    pub include_videos: bool,
}

impl CurriculumRequest {
    pub fn metadata(&self) -> CurriculumMetadata {
        CurriculumMetadata {
            topic: self.topic.clone(),
            custom_content: self.custom_content.clone(),
            difficulty: self.difficulty,
            duration: self.duration.clone(),
            include_videos: self.include_videos,
        }
    }
}

impl TryFrom<GenerateCourseRequestDto> for CurriculumRequest {
    type Error = AppError;

    fn try_from(dto: GenerateCourseRequestDto) -> Result<Self, Self::Error> {
        dto.validate()?;

        let missing = |field: &str| AppError::ValidationError(format!("Missing required field: {}", field));

        Ok(CurriculumRequest {
            topic: dto.topic.ok_or_else(|| missing("topic"))?,
            custom_content: dto.custom_content.unwrap_or_default(),
            difficulty: dto.difficulty.ok_or_else(|| missing("difficulty"))?,
            duration: dto.duration.ok_or_else(|| missing("duration"))?,
            chapter_count: dto.chapter_count.ok_or_else(|| missing("chapter_count"))?,
            include_videos: dto.include_videos,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AnswerInput {
    #[validate(length(min = 1))]
    pub question_id: String,
    pub selected_answer: SubmittedAnswer,
}

/// Body of `POST /api/quizzes/{id}/submit`.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub submission_id: Option<String>,
    #[validate(nested)]
    pub answers: Vec<AnswerInput>,
}
