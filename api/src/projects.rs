//! Project endpoints, same shape as communities but scoped to `/projects`.

use crate::client;
use crate::error::ApiError;
use crate::models::{MemberList, NewProject, Project, ProjectPage};

pub async fn list(page: u32, status: Option<&str>) -> Result<ProjectPage, ApiError> {
    let mut query = client::page_query(page);
    if let Some(status) = status {
        query.push(("status", status.to_string()));
    }
    client::get("/projects", &query).await
}

pub async fn get(project_id: u64) -> Result<Project, ApiError> {
    client::get(&format!("/projects/{project_id}"), &[]).await
}

pub async fn create(request: &NewProject) -> Result<Project, ApiError> {
    client::post("/projects", request).await
}

pub async fn update(project_id: u64, request: &NewProject) -> Result<Project, ApiError> {
    client::put(&format!("/projects/{project_id}"), request).await
}

pub async fn delete(project_id: u64) -> Result<(), ApiError> {
    client::delete(&format!("/projects/{project_id}")).await
}

pub async fn join(project_id: u64) -> Result<(), ApiError> {
    client::post_empty(&format!("/projects/{project_id}/join")).await
}

pub async fn leave(project_id: u64) -> Result<(), ApiError> {
    client::post_empty(&format!("/projects/{project_id}/leave")).await
}

pub async fn members(project_id: u64) -> Result<MemberList, ApiError> {
    client::get(&format!("/projects/{project_id}/members"), &[]).await
}
