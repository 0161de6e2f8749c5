use std::sync::Arc;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    constants::prompts::{CURRICULUM_DESIGNER_PROMPT, CURRICULUM_OUTPUT_SHAPE},
    errors::{AppError, AppResult},
    models::dto::{
        generation::{GeneratedChapter, GeneratedCurriculum},
        request::CurriculumRequest,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_shape: ResponseShape,
    pub temperature: f32,
}

/// A generative text model. Implementations return the raw model text; callers
/// are responsible for parsing and validating it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerationBackend: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> AppResult<String>;
}

/// Chat-completions backend for any OpenAI-compatible endpoint (Gemini's
/// compatibility endpoint by default).
pub struct OpenAiCompatibleBackend {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompatibleBackend {
    pub fn new(api_key: &SecretString, api_base: &str, model: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(api_base);

        Self {
            client: Client::with_config(config),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl TextGenerationBackend for OpenAiCompatibleBackend {
    async fn generate(&self, request: GenerationRequest) -> AppResult<String> {
        let mut body = json!({
            "model": self.model,
            "temperature": request.temperature,
            "messages": [
                { "role": "user", "content": request.prompt }
            ]
        });
        if request.response_shape == ResponseShape::Json {
            body["response_format"] = json!({ "type": "json_object" });
        }

        let response: Value = self.client.chat().create_byot(body).await?;

        response
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::UpstreamError("Text backend returned no message content".to_string())
            })
    }
}

pub struct ContentGenerationService {
    backend: Arc<dyn TextGenerationBackend>,
    temperature: f32,
}

impl ContentGenerationService {
    pub fn new(backend: Arc<dyn TextGenerationBackend>, temperature: f32) -> Self {
        Self {
            backend,
            temperature,
        }
    }

    /// One backend call, then strict parse and shape check. Never retried.
    pub async fn generate_outline(&self, request: &CurriculumRequest) -> AppResult<GeneratedCurriculum> {
        let generation_request = GenerationRequest {
            prompt: Self::build_prompt(request),
            response_shape: ResponseShape::Json,
            temperature: self.temperature,
        };

        log::info!(
            "Requesting {} chapter outline for topic '{}'",
            request.chapter_count,
            request.topic
        );
        let raw = self.backend.generate(generation_request).await?;

        Self::parse_outline(&raw)
    }

    pub fn build_prompt(request: &CurriculumRequest) -> String {
        let additional = if request.custom_content.trim().is_empty() {
            "None"
        } else {
            request.custom_content.as_str()
        };

        format!(
            "{}\n\nGenerate a structured {} course.\n\nTopic: {}\nDuration: {}\nNumber of chapters: {}\nAdditional requirements: {}\n\nReturn strictly valid JSON in this shape:\n\n{}\n\nThe JSON must validate against this schema:\n\n{}\n",
            CURRICULUM_DESIGNER_PROMPT,
            request.difficulty,
            request.topic,
            request.duration,
            request.chapter_count,
            additional,
            CURRICULUM_OUTPUT_SHAPE,
            Self::output_schema(),
        )
    }

    pub fn output_schema() -> String {
        serde_json::to_string_pretty(&schemars::schema_for!(GeneratedCurriculum)).unwrap_or_default()
    }

    /// Parses backend text. Non-JSON is a format error carrying the raw text;
    /// JSON without a `chapters` array is a structure error. Individual chapters
    /// are not validated beyond defaulting fields that are missing.
    pub fn parse_outline(raw: &str) -> AppResult<GeneratedCurriculum> {
        let value: Value = serde_json::from_str(raw).map_err(|e| {
            log::error!("Text backend returned invalid JSON: {}", raw);
            AppError::GenerationFormat {
                message: e.to_string(),
                raw: raw.to_string(),
            }
        })?;

        let chapters = value
            .get("chapters")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                AppError::GenerationStructure("Response has no chapters array".to_string())
            })?;

        let chapters = chapters
            .iter()
            .enumerate()
            .map(|(index, chapter)| {
                serde_json::from_value::<GeneratedChapter>(chapter.clone()).unwrap_or_else(|e| {
                    log::warn!("Chapter {} has an unexpected shape: {}", index + 1, e);
                    GeneratedChapter::default()
                })
            })
            .collect();

        let text_field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Ok(GeneratedCurriculum {
            title: text_field("title"),
            description: text_field("description"),
            chapters,
        })
    }
}
