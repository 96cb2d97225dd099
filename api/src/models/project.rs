//! Student projects: like communities, plus tech-stack and recruiting fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{default_pages, wire};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// "open", "in_progress" or "completed".
    #[serde(default)]
    pub status: Option<String>,
    #[serde(with = "wire::string_list", default)]
    pub tech_stack: Vec<String>,
    #[serde(with = "wire::string_list", default)]
    pub looking_for: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub members_count: u32,
    #[serde(default)]
    pub creator_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectPage {
    pub projects: Vec<Project>,
    #[serde(default = "default_pages")]
    pub pages: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub status: String,
    pub tech_stack: Vec<String>,
    pub looking_for: Vec<String>,
    pub github_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_encoded_stack_decodes() {
        let project: Project = serde_json::from_str(
            r#"{"id": 1, "title": "Campus Maps",
                "tech_stack": "[\"Rust\", \"Leaflet\"]",
                "looking_for": ["Backend dev"]}"#,
        )
        .unwrap();
        assert_eq!(project.tech_stack, vec!["Rust", "Leaflet"]);
        assert_eq!(project.looking_for, vec!["Backend dev"]);
    }
}
