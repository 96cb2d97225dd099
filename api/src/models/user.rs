//! User records and the auth/profile request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wire;

/// A platform user. The session holds one copy; views fetch their own copies
/// independently (member lists, post authors), so two snapshots of the same
/// user may diverge until refetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<u16>,
    #[serde(with = "wire::string_list", default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Full name, falling back to the username when both name fields are
    /// blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Body for `PUT /users/{id}`. Everything optional on the wire is sent as-is;
/// the backend treats empty strings as cleared fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub college: String,
    pub major: String,
    pub graduation_year: Option<u16>,
    #[serde(with = "wire::string_list")]
    pub skills: Vec<String>,
    pub github_url: String,
    pub linkedin_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_full_name() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "username": "alice", "first_name": "Alice", "last_name": "Nguyen"}"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "Alice Nguyen");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user: User = serde_json::from_str(
            r#"{"id": 2, "username": "bob", "first_name": "", "last_name": " "}"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "bob");
    }

    #[test]
    fn sparse_member_record_decodes() {
        let user: User = serde_json::from_str(
            r#"{"id": 3, "username": "carol", "first_name": "Carol", "last_name": "Ito",
                "skills": "[\"Python\", \"SQL\"]"}"#,
        )
        .unwrap();
        assert_eq!(user.skills, vec!["Python", "SQL"]);
        assert!(user.email.is_none());
        assert!(user.bio.is_none());
    }
}
