//! Communities and their list/member envelopes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{default_pages, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub members_count: u32,
    #[serde(default)]
    pub creator_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Envelope for `GET /communities` and `GET /users/{id}/communities`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommunityPage {
    pub communities: Vec<Community>,
    #[serde(default = "default_pages")]
    pub pages: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemberList {
    pub members: Vec<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewCommunity {
    pub name: String,
    pub description: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_envelope_decodes() {
        let page: CommunityPage = serde_json::from_str(
            r#"{"communities": [{"id": 7, "name": "Rust Club", "members_count": 42}], "pages": 3}"#,
        )
        .unwrap();
        assert_eq!(page.communities.len(), 1);
        assert_eq!(page.communities[0].name, "Rust Club");
        assert_eq!(page.communities[0].members_count, 42);
        assert_eq!(page.pages, 3);
    }

    #[test]
    fn unpaginated_list_defaults_to_one_page() {
        let page: CommunityPage =
            serde_json::from_str(r#"{"communities": []}"#).unwrap();
        assert_eq!(page.pages, 1);
    }
}
