use std::env;
use secrecy::SecretString;

pub const DEFAULT_GENERATION_API_BASE: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub generation_api_key: SecretString,
    pub generation_api_base: String,
    pub generation_model: String,
    pub generation_temperature: f32,
    pub youtube_api_key: SecretString,
    pub youtube_api_base: String,
    pub curriculum_timeout_secs: u64,
    pub video_lookup_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "studyforge-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            generation_api_key: SecretString::from(env::var("GENERATION_API_KEY")
                .unwrap_or_else(|_| "generation_api_key".to_string())),
            generation_api_base: env::var("GENERATION_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GENERATION_API_BASE.to_string()),
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            generation_temperature: env::var("GENERATION_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.6),
            youtube_api_key: SecretString::from(env::var("YOUTUBE_API_KEY")
                .unwrap_or_else(|_| "youtube_api_key".to_string())),
            youtube_api_base: env::var("YOUTUBE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_YOUTUBE_API_BASE.to_string()),
            curriculum_timeout_secs: env::var("CURRICULUM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            video_lookup_timeout_secs: env::var("VIDEO_LOOKUP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.generation_api_key.expose_secret() == "generation_api_key" {
            panic!(
                "FATAL: GENERATION_API_KEY is using default value! Set GENERATION_API_KEY environment variable."
            );
        }

        if self.youtube_api_key.expose_secret() == "youtube_api_key" {
            panic!(
                "FATAL: YOUTUBE_API_KEY is using default value! Set YOUTUBE_API_KEY environment variable."
            );
        }

        if self.curriculum_timeout_secs == 0 {
            panic!("FATAL: CURRICULUM_TIMEOUT_SECS must be greater than zero.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "studyforge-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            generation_api_key: SecretString::from("test_generation_key".to_string()),
            generation_api_base: "http://127.0.0.1:9/v1".to_string(),
            generation_model: "test-model".to_string(),
            generation_temperature: 0.6,
            youtube_api_key: SecretString::from("test_youtube_key".to_string()),
            youtube_api_base: "http://127.0.0.1:9/youtube/v3".to_string(),
            curriculum_timeout_secs: 5,
            video_lookup_timeout_secs: 1,
        }
    }
}
