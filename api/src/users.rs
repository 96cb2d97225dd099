//! User profile endpoints and per-user membership lists.

use crate::client;
use crate::error::ApiError;
use crate::models::{CommunityPage, EventPage, ProjectPage, UpdateProfileRequest, User};

pub async fn get(user_id: u64) -> Result<User, ApiError> {
    client::get(&format!("/users/{user_id}"), &[]).await
}

pub async fn update(user_id: u64, request: &UpdateProfileRequest) -> Result<User, ApiError> {
    client::put(&format!("/users/{user_id}"), request).await
}

pub async fn delete(user_id: u64) -> Result<(), ApiError> {
    client::delete(&format!("/users/{user_id}")).await
}

pub async fn communities(user_id: u64) -> Result<CommunityPage, ApiError> {
    client::get(&format!("/users/{user_id}/communities"), &[]).await
}

pub async fn projects(user_id: u64) -> Result<ProjectPage, ApiError> {
    client::get(&format!("/users/{user_id}/projects"), &[]).await
}

pub async fn events(user_id: u64) -> Result<EventPage, ApiError> {
    client::get(&format!("/users/{user_id}/events"), &[]).await
}
