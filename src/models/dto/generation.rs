use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Course outline as returned by the text backend. Chapter fields are not
/// guaranteed to be present; missing ones deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedCurriculum {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub chapters: Vec<GeneratedChapter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedChapter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "estimatedTime")]
    pub estimated_time: String,
}
