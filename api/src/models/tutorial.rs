//! Community-authored tutorials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{default_pages, wire};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// "beginner", "intermediate" or "advanced".
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(with = "wire::string_list", default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub creator_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_difficulty() -> String {
    "beginner".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TutorialPage {
    pub tutorials: Vec<Tutorial>,
    #[serde(default = "default_pages")]
    pub pages: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTutorial {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: String,
    pub difficulty: String,
    pub duration: String,
    pub tags: Vec<String>,
    pub video_url: String,
    pub external_url: String,
    pub image_url: String,
}

impl Default for NewTutorial {
    fn default() -> Self {
        NewTutorial {
            title: String::new(),
            description: String::new(),
            content: String::new(),
            category: String::new(),
            difficulty: "beginner".to_string(),
            duration: String::new(),
            tags: Vec::new(),
            video_url: String::new(),
            external_url: String::new(),
            image_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_decode_from_either_encoding() {
        let tutorial: Tutorial = serde_json::from_str(
            r#"{"id": 1, "title": "Intro to Git", "tags": "[\"git\", \"basics\"]"}"#,
        )
        .unwrap();
        assert_eq!(tutorial.tags, vec!["git", "basics"]);
        assert_eq!(tutorial.difficulty, "beginner");
    }
}
