//! Post feed endpoints, filterable by community, plus likes and the comment
//! sub-resource.

use crate::client;
use crate::error::ApiError;
use crate::models::{Comment, CommentList, NewComment, NewPost, Post, PostPage};

pub async fn list(community_id: u64, page: u32) -> Result<PostPage, ApiError> {
    let mut query = client::page_query(page);
    query.push(("community_id", community_id.to_string()));
    client::get("/posts", &query).await
}

pub async fn create(request: &NewPost) -> Result<Post, ApiError> {
    client::post("/posts", request).await
}

pub async fn delete(post_id: u64) -> Result<(), ApiError> {
    client::delete(&format!("/posts/{post_id}")).await
}

/// Toggles the current user's like. The caller refetches the feed to pick up
/// the new count.
pub async fn like(post_id: u64) -> Result<(), ApiError> {
    client::post_empty(&format!("/posts/{post_id}/like")).await
}

pub async fn comments(post_id: u64) -> Result<CommentList, ApiError> {
    client::get(&format!("/posts/{post_id}/comments"), &[]).await
}

pub async fn create_comment(post_id: u64, request: &NewComment) -> Result<Comment, ApiError> {
    client::post(&format!("/posts/{post_id}/comments"), request).await
}

pub async fn delete_comment(comment_id: u64) -> Result<(), ApiError> {
    client::delete(&format!("/posts/comments/{comment_id}")).await
}
