//! Direct messages and the server-derived conversation summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{default_pages, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub sender_id: u64,
    pub receiver_id: u64,
    pub content: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessagePage {
    pub messages: Vec<Message>,
    #[serde(default = "default_pages")]
    pub pages: u32,
}

/// One entry of `GET /messages/conversations`: the counterpart user, the most
/// recent message exchanged with them, and how many of their messages are
/// unread. Recomputed by the server; the client never derives it locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Conversation {
    pub user: User,
    #[serde(default)]
    pub last_message: Option<Message>,
    #[serde(default)]
    pub unread_count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConversationList {
    pub conversations: Vec<Conversation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewMessage {
    pub receiver_id: u64,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct UnreadCount {
    pub unread_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_decodes_with_unread_badge() {
        let list: ConversationList = serde_json::from_str(
            r#"{"conversations": [{
                "user": {"id": 2, "username": "bob", "first_name": "Bob", "last_name": "Lee"},
                "last_message": {"id": 9, "sender_id": 2, "receiver_id": 1,
                                 "content": "see you there", "read": false},
                "unread_count": 3
            }]}"#,
        )
        .unwrap();
        let convo = &list.conversations[0];
        assert_eq!(convo.user.id, 2);
        assert_eq!(convo.unread_count, 3);
        assert!(!convo.last_message.as_ref().unwrap().read);
    }
}
