pub mod answer_normalizer;
pub mod content_generation_service;
pub mod curriculum_service;
pub mod flashcard_service;
pub mod quiz_service;
pub mod quiz_submission_service;
pub mod scoring_service;
pub mod video_enrichment_service;
