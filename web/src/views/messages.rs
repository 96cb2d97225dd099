//! Direct messages: conversation list on the left, the active thread on the
//! right. Opening a thread marks its unread messages read one by one (the
//! backend has no batch endpoint) and then refreshes the conversation list so
//! the badges catch up.

use api::{Conversation, Message, NewMessage};
use dioxus::prelude::*;
use ui::{use_auth, EmptyState, ErrorBanner};

use super::format_datetime;
use crate::guards::RequireAuth;

#[component]
pub fn Messages() -> Element {
    rsx! {
        RequireAuth {
            MessagesPage {}
        }
    }
}

#[component]
fn MessagesPage() -> Element {
    let auth = use_auth();
    let mut conversations = use_signal(Vec::<Conversation>::new);
    let mut selected = use_signal(|| Option::<u64>::None);
    let mut messages = use_signal(Vec::<Message>::new);
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut refresh_conversations = use_signal(|| 0u32);
    let mut reload_thread = use_signal(|| 0u32);

    let _conversations_loader = use_resource(move || async move {
        refresh_conversations();
        match api::messages::conversations().await {
            Ok(list) => {
                // Auto-open the most recent thread on first load. Peek so a
                // later refresh does not re-run this loader.
                if selected.peek().is_none() {
                    if let Some(first) = list.conversations.first() {
                        selected.set(Some(first.user.id));
                    }
                }
                conversations.set(list.conversations);
                error.set(None);
            }
            Err(err) => {
                tracing::error!("failed to load conversations: {err}");
                error.set(Some(err.to_string()));
            }
        }
        loading.set(false);
    });

    let _thread_loader = use_resource(move || async move {
        reload_thread();
        let Some(counterpart) = selected() else {
            return;
        };
        let me = auth().user_id();
        match api::messages::thread(counterpart, 1).await {
            Ok(page) => {
                let unread = unread_message_ids(&page.messages, me);
                messages.set(page.messages);
                if !unread.is_empty() {
                    for message_id in unread {
                        if let Err(err) = api::messages::mark_read(message_id).await {
                            tracing::warn!("failed to mark message {message_id} read: {err}");
                        }
                    }
                    refresh_conversations += 1;
                }
            }
            Err(err) => {
                tracing::error!("failed to load thread with user {counterpart}: {err}");
                error.set(Some(err.to_string()));
            }
        }
    });

    let handle_send = move |_| {
        let content = draft().trim().to_string();
        let Some(receiver_id) = selected() else {
            return;
        };
        if !can_send(&content, Some(receiver_id)) {
            return;
        }
        spawn(async move {
            sending.set(true);
            let request = NewMessage {
                receiver_id,
                content,
            };
            // No local echo: the thread is refetched so concurrent incoming
            // messages and read flags come back in server order.
            match api::messages::send(&request).await {
                Ok(_) => {
                    draft.set(String::new());
                    reload_thread += 1;
                    refresh_conversations += 1;
                }
                Err(err) => {
                    tracing::error!("failed to send message: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            sending.set(false);
        });
    };

    let me = auth().user_id();
    let active = conversations()
        .into_iter()
        .find(|conversation| Some(conversation.user.id) == selected());

    rsx! {
        div {
            class: "page messages-page",
            h1 { "Messages" }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            if !loading() && conversations().is_empty() {
                EmptyState {
                    title: "No conversations yet",
                    hint: "Messages from other students will show up here",
                }
            } else {
                div {
                    class: "messages-layout",
                    aside {
                        class: "conversation-list",
                        for conversation in conversations() {
                            ConversationRow {
                                key: "{conversation.user.id}",
                                conversation: conversation.clone(),
                                active: Some(conversation.user.id) == selected(),
                                on_select: move |user_id| selected.set(Some(user_id)),
                            }
                        }
                    }
                    section {
                        class: "thread-pane",
                        if let Some(active) = active {
                            header {
                                class: "thread-header",
                                strong { "{active.user.display_name()}" }
                            }
                            div {
                                class: "thread-messages",
                                for message in messages() {
                                    div {
                                        key: "{message.id}",
                                        class: if Some(message.sender_id) == me {
                                            "message-bubble mine"
                                        } else {
                                            "message-bubble theirs"
                                        },
                                        p { "{message.content}" }
                                        span { class: "muted", "{format_datetime(message.created_at)}" }
                                    }
                                }
                            }
                            div {
                                class: "thread-composer",
                                input {
                                    r#type: "text",
                                    placeholder: "Type a message...",
                                    value: draft(),
                                    oninput: move |evt| draft.set(evt.value()),
                                    onkeypress: move |evt| {
                                        if evt.key() == Key::Enter {
                                            handle_send(());
                                        }
                                    },
                                }
                                button {
                                    class: "primary",
                                    disabled: !can_send(draft().trim(), selected()) || sending(),
                                    onclick: move |_| handle_send(()),
                                    "Send"
                                }
                            }
                        } else {
                            p { class: "muted", "Select a conversation" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConversationRow(
    conversation: Conversation,
    active: bool,
    on_select: EventHandler<u64>,
) -> Element {
    let user_id = conversation.user.id;
    let preview = conversation
        .last_message
        .as_ref()
        .map(|message| message.content.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: if active { "conversation-row active" } else { "conversation-row" },
            onclick: move |_| on_select.call(user_id),
            div {
                class: "conversation-title",
                strong { "{conversation.user.display_name()}" }
                if conversation.unread_count > 0 {
                    span { class: "nav-badge", "{conversation.unread_count}" }
                }
            }
            p { class: "conversation-preview", "{preview}" }
        }
    }
}

/// A message can go out only with a non-empty body and an open thread.
fn can_send(content: &str, selected: Option<u64>) -> bool {
    !content.is_empty() && selected.is_some()
}

/// Ids of the counterpart's messages that still need a mark-read call. Own
/// outgoing messages are never marked, whatever their flag says.
fn unread_message_ids(messages: &[Message], me: Option<u64>) -> Vec<u64> {
    messages
        .iter()
        .filter(|message| !message.read && Some(message.receiver_id) == me)
        .map(|message| message.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: u64, sender_id: u64, receiver_id: u64, read: bool) -> Message {
        Message {
            id,
            sender_id,
            receiver_id,
            content: "hello".to_string(),
            read,
            created_at: None,
        }
    }

    #[test]
    fn send_requires_body_and_recipient() {
        assert!(can_send("hey", Some(2)));
        assert!(!can_send("", Some(2)));
        assert!(!can_send("hey", None));
        assert!(!can_send("", None));
    }

    #[test]
    fn only_incoming_unread_messages_are_marked() {
        let thread = vec![
            message(1, 2, 1, false),
            message(2, 2, 1, true),
            message(3, 1, 2, false),
        ];
        assert_eq!(unread_message_ids(&thread, Some(1)), vec![1]);
        assert!(unread_message_ids(&thread, None).is_empty());
    }
}
