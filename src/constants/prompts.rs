pub const CURRICULUM_DESIGNER_PROMPT: &str = "You are an expert curriculum designer.

Design a structured course that teaches the requested topic at the requested difficulty. Split it into exactly the requested number of chapters, ordered from first to last as a learner should take them. Each chapter needs a short title, a one or two sentence description of what it covers, and an estimated study time (for example \"45 minutes\" or \"2 hours\") that fits the overall duration.

Return strictly valid JSON and nothing else. No markdown fences, no prose, no extra keys.";

pub const CURRICULUM_OUTPUT_SHAPE: &str = r#"{
  "title": "",
  "description": "",
  "chapters": [
    {
      "title": "",
      "description": "",
      "estimatedTime": ""
    }
  ]
}"#;
