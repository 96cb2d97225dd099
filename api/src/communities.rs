//! Community endpoints: paginated listing, CRUD, membership.

use crate::client;
use crate::error::ApiError;
use crate::models::{Community, CommunityPage, MemberList, NewCommunity};

/// Server-side pagination plus an optional category filter. Free-text search
/// stays client-side, over the returned page only.
pub async fn list(page: u32, category: Option<&str>) -> Result<CommunityPage, ApiError> {
    let mut query = client::page_query(page);
    if let Some(category) = category {
        query.push(("category", category.to_string()));
    }
    client::get("/communities", &query).await
}

pub async fn get(community_id: u64) -> Result<Community, ApiError> {
    client::get(&format!("/communities/{community_id}"), &[]).await
}

pub async fn create(request: &NewCommunity) -> Result<Community, ApiError> {
    client::post("/communities", request).await
}

pub async fn update(community_id: u64, request: &NewCommunity) -> Result<Community, ApiError> {
    client::put(&format!("/communities/{community_id}"), request).await
}

pub async fn delete(community_id: u64) -> Result<(), ApiError> {
    client::delete(&format!("/communities/{community_id}")).await
}

pub async fn join(community_id: u64) -> Result<(), ApiError> {
    client::post_empty(&format!("/communities/{community_id}/join")).await
}

pub async fn leave(community_id: u64) -> Result<(), ApiError> {
    client::post_empty(&format!("/communities/{community_id}/leave")).await
}

pub async fn members(community_id: u64) -> Result<MemberList, ApiError> {
    client::get(&format!("/communities/{community_id}/members"), &[]).await
}
