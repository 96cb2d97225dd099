//! Tutorial endpoints: listing with category/difficulty filters, CRUD,
//! categories.

use crate::client;
use crate::error::ApiError;
use crate::models::{CategoryList, NewTutorial, Tutorial, TutorialPage};

pub async fn list(
    page: u32,
    category: Option<&str>,
    difficulty: Option<&str>,
) -> Result<TutorialPage, ApiError> {
    let mut query = client::page_query(page);
    if let Some(category) = category {
        query.push(("category", category.to_string()));
    }
    if let Some(difficulty) = difficulty {
        query.push(("difficulty", difficulty.to_string()));
    }
    client::get("/tutorials", &query).await
}

pub async fn get(tutorial_id: u64) -> Result<Tutorial, ApiError> {
    client::get(&format!("/tutorials/{tutorial_id}"), &[]).await
}

pub async fn create(request: &NewTutorial) -> Result<Tutorial, ApiError> {
    client::post("/tutorials", request).await
}

pub async fn update(tutorial_id: u64, request: &NewTutorial) -> Result<Tutorial, ApiError> {
    client::put(&format!("/tutorials/{tutorial_id}"), request).await
}

pub async fn delete(tutorial_id: u64) -> Result<(), ApiError> {
    client::delete(&format!("/tutorials/{tutorial_id}")).await
}

pub async fn categories() -> Result<CategoryList, ApiError> {
    client::get("/tutorials/categories", &[]).await
}
