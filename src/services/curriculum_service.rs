use std::{sync::Arc, time::Duration};

use tokio::task::JoinSet;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Chapter, Curriculum},
        dto::request::CurriculumRequest,
    },
    repositories::CurriculumRepository,
    services::{
        content_generation_service::ContentGenerationService,
        video_enrichment_service::VideoEnrichmentService,
    },
};

pub struct CurriculumService {
    content: ContentGenerationService,
    videos: Arc<VideoEnrichmentService>,
    repository: Arc<dyn CurriculumRepository>,
    deadline: Duration,
}

impl CurriculumService {
    pub fn new(
        content: ContentGenerationService,
        videos: Arc<VideoEnrichmentService>,
        repository: Arc<dyn CurriculumRepository>,
        deadline: Duration,
    ) -> Self {
        Self {
            content,
            videos,
            repository,
            deadline,
        }
    }

    /// Builds a curriculum under the overall deadline and persists it. Nothing
    /// is stored when any step fails.
    pub async fn generate_course(
        &self,
        owner_id: &str,
        request: CurriculumRequest,
    ) -> AppResult<Curriculum> {
        let curriculum = tokio::time::timeout(self.deadline, self.build_curriculum(owner_id, &request))
            .await
            .map_err(|_| {
                log::error!(
                    "Curriculum generation for topic '{}' exceeded {:?}",
                    request.topic,
                    self.deadline
                );
                AppError::GenerationTimeout(self.deadline.as_secs())
            })??;

        let created = self.repository.create(curriculum).await?;
        log::info!(
            "Stored curriculum {} with {} chapters for owner {}",
            created.id,
            created.chapters.len(),
            owner_id
        );
        Ok(created)
    }

    /// Validate, generate the outline, enrich chapters concurrently when asked,
    /// and assemble in the order the backend returned them.
    pub async fn build_curriculum(
        &self,
        owner_id: &str,
        request: &CurriculumRequest,
    ) -> AppResult<Curriculum> {
        request.validate()?;

        let outline = self.content.generate_outline(request).await?;
        if outline.chapters.is_empty() {
            return Err(AppError::GenerationStructure(
                "Generated outline contains no chapters".to_string(),
            ));
        }

        let titles: Vec<String> = outline
            .chapters
            .iter()
            .enumerate()
            .map(|(index, chapter)| {
                if chapter.title.trim().is_empty() {
                    format!("Chapter {}", index + 1)
                } else {
                    chapter.title.clone()
                }
            })
            .collect();

        let video_ids = if request.include_videos {
            self.enrich_chapters(&titles, &request.topic).await
        } else {
            vec![None; titles.len()]
        };

        let chapters = outline
            .chapters
            .into_iter()
            .zip(titles)
            .zip(video_ids)
            .map(|((chapter, title), video_id)| Chapter {
                title,
                description: chapter.description,
                estimated_time: chapter.estimated_time,
                video_id,
            })
            .collect();

        let title = if outline.title.trim().is_empty() {
            request.topic.clone()
        } else {
            outline.title
        };

        Curriculum::assemble(owner_id, title, outline.description, request.metadata(), chapters)
    }

    /// One task per chapter, all joined before returning. Results line up with
    /// `titles` by index; a panicked task degrades to no reference. Dropping
    /// this future (deadline hit) drops the set and aborts pending lookups.
    async fn enrich_chapters(&self, titles: &[String], topic: &str) -> Vec<Option<String>> {
        let mut lookups = JoinSet::new();
        for (index, title) in titles.iter().enumerate() {
            let videos = Arc::clone(&self.videos);
            let title = title.clone();
            let topic = topic.to_string();
            lookups.spawn(async move { (index, videos.find_video(&title, &topic).await) });
        }

        let mut video_ids = vec![None; titles.len()];
        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok((index, video_id)) => video_ids[index] = video_id,
                Err(e) => log::warn!("Video lookup task failed: {}", e),
            }
        }

        log::info!(
            "Enriched {} of {} chapters with videos",
            video_ids.iter().filter(|v| v.is_some()).count(),
            titles.len()
        );
        video_ids
    }

    /// A curriculum owned by someone else is reported as not found.
    pub async fn get_course(&self, owner_id: &str, id: &str) -> AppResult<Curriculum> {
        self.repository
            .find_by_id(owner_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", id)))
    }

    pub async fn list_courses(&self, owner_id: &str) -> AppResult<Vec<Curriculum>> {
        self.repository.list_by_owner(owner_id).await
    }
}
