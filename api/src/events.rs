//! Event endpoints: listing with type/status filters, registration,
//! attendee lists.

use crate::client;
use crate::error::ApiError;
use crate::models::{AttendeeList, Event, EventPage, NewEvent};

pub async fn list(
    page: u32,
    event_type: Option<&str>,
    status: Option<&str>,
) -> Result<EventPage, ApiError> {
    let mut query = client::page_query(page);
    if let Some(event_type) = event_type {
        query.push(("event_type", event_type.to_string()));
    }
    if let Some(status) = status {
        query.push(("status", status.to_string()));
    }
    client::get("/events", &query).await
}

pub async fn get(event_id: u64) -> Result<Event, ApiError> {
    client::get(&format!("/events/{event_id}"), &[]).await
}

pub async fn create(request: &NewEvent) -> Result<Event, ApiError> {
    client::post("/events", request).await
}

pub async fn update(event_id: u64, request: &NewEvent) -> Result<Event, ApiError> {
    client::put(&format!("/events/{event_id}"), request).await
}

pub async fn delete(event_id: u64) -> Result<(), ApiError> {
    client::delete(&format!("/events/{event_id}")).await
}

/// Register the current user. The client-side availability check is only
/// advisory; a stale page may still send this and get a rejection, which the
/// caller surfaces verbatim.
pub async fn register(event_id: u64) -> Result<(), ApiError> {
    client::post_empty(&format!("/events/{event_id}/register")).await
}

pub async fn unregister(event_id: u64) -> Result<(), ApiError> {
    client::post_empty(&format!("/events/{event_id}/unregister")).await
}

pub async fn attendees(event_id: u64) -> Result<AttendeeList, ApiError> {
    client::get(&format!("/events/{event_id}/attendees"), &[]).await
}
