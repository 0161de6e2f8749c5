use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoQuery {
    pub text: String,
    pub max_results: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoHit {
    pub video_id: String,
}

/// External video search. Only video-type results are returned.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoSearchBackend: Send + Sync {
    async fn search(&self, query: VideoQuery) -> AppResult<Vec<VideoHit>>;
}

#[derive(Debug, Deserialize)]
struct YouTubeSearchResponse {
    #[serde(default)]
    items: Vec<YouTubeSearchItem>,
}

#[derive(Debug, Deserialize)]
struct YouTubeSearchItem {
    id: YouTubeItemId,
}

#[derive(Debug, Deserialize)]
struct YouTubeItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

/// YouTube Data API v3 `search.list`.
pub struct YouTubeSearchBackend {
    client: reqwest::Client,
    api_key: SecretString,
    api_base: String,
}

impl YouTubeSearchBackend {
    pub fn new(api_key: SecretString, api_base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl VideoSearchBackend for YouTubeSearchBackend {
    async fn search(&self, query: VideoQuery) -> AppResult<Vec<VideoHit>> {
        let max_results = query.max_results.to_string();
        let response = self
            .client
            .get(format!("{}/search", self.api_base))
            .query(&[
                ("part", "snippet"),
                ("q", query.text.as_str()),
                ("maxResults", max_results.as_str()),
                ("type", "video"),
                ("key", self.api_key.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Video search request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamError(format!(
                "Video search returned status {}",
                response.status()
            )));
        }

        let body: YouTubeSearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Invalid video search response: {}", e)))?;

        Ok(body
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .map(|video_id| VideoHit { video_id })
            .collect())
    }
}

/// Best-effort lookup of one video per chapter. Failures and timeouts are
/// logged and reported as "no reference"; nothing is ever propagated.
pub struct VideoEnrichmentService {
    backend: Arc<dyn VideoSearchBackend>,
    lookup_timeout: Duration,
}

impl VideoEnrichmentService {
    pub fn new(backend: Arc<dyn VideoSearchBackend>, lookup_timeout: Duration) -> Self {
        Self {
            backend,
            lookup_timeout,
        }
    }

    pub fn build_query(chapter_title: &str, topic: &str) -> VideoQuery {
        VideoQuery {
            text: format!("{} {}", topic, chapter_title).trim().to_string(),
            max_results: 1,
        }
    }

    pub async fn find_video(&self, chapter_title: &str, topic: &str) -> Option<String> {
        let query = Self::build_query(chapter_title, topic);

        match tokio::time::timeout(self.lookup_timeout, self.backend.search(query)).await {
            Ok(Ok(hits)) => {
                let video_id = hits.into_iter().next().map(|hit| hit.video_id);
                if video_id.is_none() {
                    log::info!("No video found for chapter '{}'", chapter_title);
                }
                video_id
            }
            Ok(Err(e)) => {
                log::warn!("Video lookup failed for chapter '{}': {}", chapter_title, e);
                None
            }
            Err(_) => {
                log::warn!(
                    "Video lookup for chapter '{}' timed out after {:?}",
                    chapter_title,
                    self.lookup_timeout
                );
                None
            }
        }
    }
}
