//! Direct-message endpoints. There is no batch mark-read endpoint; the
//! messages view calls [`mark_read`] once per unread message.

use crate::client;
use crate::error::ApiError;
use crate::models::{ConversationList, Message, MessagePage, NewMessage, UnreadCount};

/// The thread with one counterpart user, oldest first.
pub async fn thread(user_id: u64, page: u32) -> Result<MessagePage, ApiError> {
    let mut query = vec![("page", page.to_string()), ("per_page", "50".to_string())];
    query.push(("user_id", user_id.to_string()));
    client::get("/messages", &query).await
}

pub async fn send(request: &NewMessage) -> Result<Message, ApiError> {
    client::post("/messages", request).await
}

pub async fn mark_read(message_id: u64) -> Result<(), ApiError> {
    client::post_empty(&format!("/messages/{message_id}/read")).await
}

pub async fn conversations() -> Result<ConversationList, ApiError> {
    client::get("/messages/conversations", &[]).await
}

pub async fn unread_count() -> Result<UnreadCount, ApiError> {
    client::get("/messages/unread-count", &[]).await
}
